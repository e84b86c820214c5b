// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod jwt;
pub mod middleware;
mod password;
mod user_services;

pub use middleware::{AuthRequest, CurrentUser, SessionMiddlewareFactory};
pub use password::{
    PasswordError, generate_password, generate_secret_hex, hash_password, verify_password,
};
pub use user_services::{SessionCheck, UserServiceError, UserServiceResult, UserServices};
