// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod session;
pub mod types;

/// Configure login and logout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(session::login_page))
        .route("/login", web::post().to(session::login_submit))
        .route("/logout", web::post().to(session::logout));
}
