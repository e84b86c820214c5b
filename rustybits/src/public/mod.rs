// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod error;
pub mod handlers;
pub mod rss;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/posts", web::get().to(handlers::list_posts))
        .route("/posts/{slug}", web::get().to(handlers::show_post))
        .route("/tags", web::get().to(handlers::tag_cloud))
        .route("/tags/{tag}", web::get().to(handlers::posts_by_tag))
        .route("/rss", web::get().to(rss::rss_feed));
}
