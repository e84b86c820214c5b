// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::forms::{parse_post_form, parse_published_flag};
use super::shared::{parse_id, redirect, render_admin, render_fragment};
use crate::app_state::AppState;
use crate::content::pagination::{ADMIN_PAGE_SIZE, PageQuery, Pagination};
use crate::public::error;
use crate::store::{PostDraft, PostFilter, PostLookup, PostOrder, StoreError};
use crate::util::htmx::{HX_TRIGGER, is_htmx};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use minijinja::context;

const POSTS_PATH: &str = "/admin/posts";
const SAVE_FAILED: &str = "The post could not be saved. Please try again.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(list_posts))
            .route(web::post().to(create_post)),
    )
    .route("/posts/new", web::get().to(new_post))
    .route("/posts/{id}/edit", web::get().to(edit_post))
    .route("/posts/{id}/toggle", web::patch().to(toggle_post))
    .service(
        web::resource("/posts/{id}")
            .route(web::patch().to(update_post))
            .route(web::post().to(update_post))
            .route(web::delete().to(delete_post)),
    );
}

async fn list_posts(
    req: HttpRequest,
    query: PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let filter = PostFilter::all();
    let total = match app_state.store.count_posts(&filter).await {
        Ok(total) => total,
        Err(err) => return storage_failure(&app_state, "count posts", err),
    };
    let pagination = Pagination::new(query.page(), ADMIN_PAGE_SIZE, total.max(0) as u64);
    let posts = match app_state
        .store
        .find_posts(
            &filter,
            PostOrder::Newest,
            pagination.limit(),
            pagination.offset(),
        )
        .await
    {
        Ok(posts) => posts,
        Err(err) => return storage_failure(&app_state, "list posts", err),
    };

    render_admin(
        &app_state,
        "admin/posts.html",
        context! {
            site => app_state.site(&req),
            posts => posts,
            pagination => pagination,
        },
        StatusCode::OK,
    )
}

async fn new_post(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse> {
    render_form(&req, &app_state, None, &PostDraft::default(), None, StatusCode::OK).await
}

async fn create_post(
    req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let draft = parse_post_form(&body);

    match app_state.store.create_post(&draft).await {
        Ok(post) => {
            log::info!("Created post {} ({})", post.id, post.slug);
            if is_htmx(&req) {
                render_fragment(
                    &app_state,
                    "admin/post_row.html",
                    context! { post => post },
                    Some("postCreated"),
                )
            } else {
                Ok(redirect(POSTS_PATH))
            }
        }
        Err(err) => write_failure(&req, &app_state, None, &draft, err).await,
    }
}

async fn edit_post(
    req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return error::not_found(&app_state);
    };

    match app_state.store.find_post(PostLookup::Id(id)).await {
        Ok(post) => {
            render_form(
                &req,
                &app_state,
                Some(post.id),
                &PostDraft::from(&post),
                None,
                StatusCode::OK,
            )
            .await
        }
        Err(err) if err.is_not_found() => error::not_found(&app_state),
        Err(err) => storage_failure(&app_state, "load post for editing", err),
    }
}

async fn update_post(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return error::not_found(&app_state);
    };

    let draft = parse_post_form(&body);

    match app_state.store.update_post(id, &draft).await {
        Ok(post) => {
            log::info!("Updated post {} ({})", post.id, post.slug);
            if is_htmx(&req) {
                render_fragment(
                    &app_state,
                    "admin/post_row.html",
                    context! { post => post },
                    Some("postUpdated"),
                )
            } else {
                Ok(redirect(POSTS_PATH))
            }
        }
        Err(err) if err.is_not_found() => error::not_found(&app_state),
        Err(err) => write_failure(&req, &app_state, Some(id), &draft, err).await,
    }
}

async fn delete_post(
    req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return error::not_found(&app_state);
    };

    match app_state.store.delete_post(id).await {
        Ok(()) => {
            log::info!("Deleted post {}", id);
            if is_htmx(&req) {
                Ok(HttpResponse::Ok()
                    .insert_header((HX_TRIGGER, "postDeleted"))
                    .finish())
            } else {
                Ok(redirect(POSTS_PATH))
            }
        }
        Err(err) if err.is_not_found() => error::not_found(&app_state),
        Err(err) => storage_failure(&app_state, "delete post", err),
    }
}

/// Flip the published flag, or set it when the body carries `published`, and
/// return the refreshed status button.
async fn toggle_post(
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return error::not_found(&app_state);
    };

    let result = match parse_published_flag(&body) {
        Some(published) => app_state.store.set_published(id, published).await,
        None => app_state.store.toggle_published(id).await,
    };
    match result {
        Ok(post) => {
            log::info!(
                "Post {} is now {}",
                post.id,
                if post.published { "published" } else { "a draft" }
            );
            render_fragment(
                &app_state,
                "admin/post_status.html",
                context! { post => post },
                None,
            )
        }
        Err(err) if err.is_not_found() => error::not_found(&app_state),
        Err(err) => storage_failure(&app_state, "toggle post", err),
    }
}

/// Re-render the form with the submitted values after a failed create or update.
async fn write_failure(
    req: &HttpRequest,
    app_state: &AppState,
    post_id: Option<i64>,
    draft: &PostDraft,
    err: StoreError,
) -> Result<HttpResponse> {
    match err {
        StoreError::Validation(message) => render_form(
            req,
            app_state,
            post_id,
            draft,
            Some(&message),
            StatusCode::BAD_REQUEST,
        )
        .await,
        other => {
            log::error!("Failed to save post {:?}: {}", draft.title, other);
            render_form(
                req,
                app_state,
                post_id,
                draft,
                Some(SAVE_FAILED),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .await
        }
    }
}

/// The existing tags are offered as suggestions; the form still works without them.
async fn render_form(
    req: &HttpRequest,
    app_state: &AppState,
    post_id: Option<i64>,
    draft: &PostDraft,
    error: Option<&str>,
    status_code: StatusCode,
) -> Result<HttpResponse> {
    let known_tags = match app_state.store.list_tags().await {
        Ok(tags) => tags,
        Err(err) => {
            log::warn!("Failed to load tag suggestions: {}", err);
            Vec::new()
        }
    };

    render_admin(
        app_state,
        "admin/post_form.html",
        context! {
            site => app_state.site(req),
            post_id => post_id,
            draft => draft,
            error => error,
            known_tags => known_tags,
        },
        status_code,
    )
}

fn storage_failure(app_state: &AppState, operation: &str, err: StoreError) -> Result<HttpResponse> {
    log::error!("Failed to {}: {}", operation, err);
    error::internal_error(app_state)
}
