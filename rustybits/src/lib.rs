// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod admin;
pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod builtin;
pub mod config;
pub mod content;
pub mod headers;
pub mod iam;
pub mod login;
pub mod public;
pub mod roles;
pub mod runtime_paths;
pub mod store;
pub mod templates;
pub mod util;

use actix_web::web;

/// Register every route of the site. Order matters: the catch-all public
/// routes come last so `/admin`, `/api` and `/login` win.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(admin::configure)
        .configure(api::configure)
        .configure(login::configure)
        .configure(builtin::configure)
        .configure(public::configure)
        .default_service(web::route().to(public::error::default_not_found));
}
