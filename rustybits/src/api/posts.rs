// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::app_state::AppState;
use crate::content::pagination::{API_PAGE_SIZE, PageQuery, Pagination};
use crate::iam::AuthRequest;
use crate::roles::Role;
use crate::store::{Post, PostFilter, PostLookup, PostOrder};

#[derive(Serialize)]
struct PostsResponse {
    posts: Vec<Post>,
    page: u32,
}

pub async fn get_posts(query: PageQuery, state: web::Data<AppState>) -> HttpResponse {
    let page = query.page();
    let pagination = Pagination::new(page, API_PAGE_SIZE, 0);

    match state
        .store
        .find_posts(
            &PostFilter::published(),
            PostOrder::Newest,
            pagination.limit(),
            pagination.offset(),
        )
        .await
    {
        Ok(posts) => HttpResponse::Ok().json(PostsResponse { posts, page }),
        Err(err) => {
            log::error!("Failed to load posts for API page {}: {}", page, err);
            HttpResponse::InternalServerError().json(json!({
                "error": "failed to load posts"
            }))
        }
    }
}

/// Single post by id. Drafts are only visible to editors.
pub async fn get_post(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Ok(id) = path.trim().parse::<i64>() else {
        return post_not_found();
    };

    match state.store.find_post(PostLookup::Id(id)).await {
        Ok(post) if post.published || req.has_role(Role::Editor) => {
            HttpResponse::Ok().json(post)
        }
        Ok(_) => post_not_found(),
        Err(err) if err.is_not_found() => post_not_found(),
        Err(err) => {
            log::error!("Failed to load post {} for API: {}", id, err);
            HttpResponse::InternalServerError().json(json!({
                "error": "failed to load the post"
            }))
        }
    }
}

fn post_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Post Not Found" }))
}
