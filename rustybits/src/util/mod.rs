// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod htmx;
pub mod test_config;
pub mod test_fixtures;
pub mod urlencoded;

pub use htmx::{HX_REDIRECT, HX_REQUEST, HX_TRIGGER, is_htmx};
pub use test_config::{TEST_ARGON2_PARAMS, TestConfigBuilder, test_config};
pub use test_fixtures::TestFixtureRoot;
