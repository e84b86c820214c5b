// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod forms;
pub mod handlers;
pub mod middleware;
mod posts;
mod shared;

pub use forms::{parse_post_form, parse_published_flag};
pub use handlers::configure;
pub use middleware::{RequireRole, RequireUser};
