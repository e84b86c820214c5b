// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::{middleware, posts, shared};
use crate::app_state::AppState;
use crate::content::pagination::DASHBOARD_RECENT_POSTS;
use crate::public::error;
use crate::roles::Role;
use crate::store::{PostFilter, PostOrder};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use minijinja::context;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Wrapped last runs first: identity is checked before the role.
    cfg.service(
        web::scope("/admin")
            .wrap(middleware::RequireRole::new(Role::Editor))
            .wrap(middleware::RequireUser)
            .route("", web::get().to(dashboard))
            .route("/", web::get().to(dashboard))
            .configure(posts::configure),
    );
}

async fn dashboard(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let stats = match app_state.store.post_stats().await {
        Ok(stats) => stats,
        Err(err) => {
            log::error!("Failed to load dashboard stats: {}", err);
            return error::internal_error(&app_state);
        }
    };

    let recent_posts = match app_state
        .store
        .find_posts(
            &PostFilter::all(),
            PostOrder::Newest,
            DASHBOARD_RECENT_POSTS as i64,
            0,
        )
        .await
    {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("Failed to load recent posts: {}", err);
            return error::internal_error(&app_state);
        }
    };

    // Drafts that have waited longest come first.
    let draft_queue = match app_state
        .store
        .find_posts(
            &PostFilter::drafts(),
            PostOrder::Oldest,
            DASHBOARD_RECENT_POSTS as i64,
            0,
        )
        .await
    {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("Failed to load draft queue: {}", err);
            return error::internal_error(&app_state);
        }
    };

    shared::render_admin(
        &app_state,
        "admin/dashboard.html",
        context! {
            site => app_state.site(&req),
            stats => stats,
            recent_posts => recent_posts,
            draft_queue => draft_queue,
        },
        StatusCode::OK,
    )
}
