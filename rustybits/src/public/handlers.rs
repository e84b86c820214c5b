// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error;
use crate::app_state::AppState;
use crate::content::pagination::{HOME_PAGE_SIZE, PUBLIC_PAGE_SIZE, PageQuery, Pagination};
use crate::store::{Post, PostFilter, PostLookup, PostOrder, StoreError};
use crate::templates::render_html;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::debug;
use minijinja::{Value, context};

pub async fn home(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = match state
        .store
        .find_posts(
            &PostFilter::published(),
            PostOrder::Newest,
            HOME_PAGE_SIZE as i64,
            0,
        )
        .await
    {
        Ok(posts) => posts,
        Err(err) => return storage_failure(&state, "home page posts", err),
    };

    render_page(
        &state,
        "home.html",
        context! {
            site => state.site(&req),
            posts => posts,
        },
    )
}

pub async fn list_posts(
    req: HttpRequest,
    query: PageQuery,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (posts, pagination) =
        match published_page(&state, PostFilter::published(), query.page()).await {
            Ok(page) => page,
            Err(err) => return storage_failure(&state, "post listing", err),
        };

    render_page(
        &state,
        "posts.html",
        context! {
            site => state.site(&req),
            heading => "All posts",
            posts => posts,
            pagination => pagination,
        },
    )
}

pub async fn show_post(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let post = match state.store.find_post(PostLookup::PublishedSlug(&slug)).await {
        Ok(post) => post,
        Err(err) if err.is_not_found() => {
            debug!("No published post with slug {}", slug);
            return error::not_found(&state);
        }
        Err(err) => return storage_failure(&state, "post", err),
    };

    render_page(
        &state,
        "post.html",
        context! {
            site => state.site(&req),
            post => post,
        },
    )
}

/// Published posts carrying `tag`. An unknown tag is an empty listing, not a 404.
pub async fn posts_by_tag(
    req: HttpRequest,
    path: web::Path<String>,
    query: PageQuery,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let tag = path.into_inner();
    let page = match state.store.find_tag_by_name(&tag).await {
        Ok(_) => {
            published_page(&state, PostFilter::published_with_tag(&tag), query.page()).await
        }
        Err(err) if err.is_not_found() => {
            Ok((Vec::new(), Pagination::new(query.page(), PUBLIC_PAGE_SIZE, 0)))
        }
        Err(err) => Err(err),
    };
    let (posts, pagination) = match page {
        Ok(page) => page,
        Err(err) => return storage_failure(&state, "tag listing", err),
    };

    render_page(
        &state,
        "posts.html",
        context! {
            site => state.site(&req),
            heading => format!("Posts tagged: {}", tag),
            tag => tag,
            posts => posts,
            pagination => pagination,
        },
    )
}

pub async fn tag_cloud(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let tags = match state.store.list_tags_with_counts().await {
        Ok(tags) => tags,
        Err(err) => return storage_failure(&state, "tag cloud", err),
    };

    render_page(
        &state,
        "tags.html",
        context! {
            site => state.site(&req),
            tags => tags,
        },
    )
}

async fn published_page(
    state: &AppState,
    filter: PostFilter,
    page: u32,
) -> Result<(Vec<Post>, Pagination), StoreError> {
    let total = state.store.count_posts(&filter).await?;
    let pagination = Pagination::new(page, PUBLIC_PAGE_SIZE, total.max(0) as u64);
    let posts = state
        .store
        .find_posts(
            &filter,
            PostOrder::Newest,
            pagination.limit(),
            pagination.offset(),
        )
        .await?;
    Ok((posts, pagination))
}

fn render_page(state: &AppState, template: &str, context: Value) -> Result<HttpResponse> {
    match render_html(state.template_engine(), template, context) {
        Some(response) => Ok(response),
        None => error::internal_error(state),
    }
}

fn storage_failure(state: &AppState, what: &str, err: StoreError) -> Result<HttpResponse> {
    log::error!("Failed to load {}: {}", what, err);
    error::internal_error(state)
}
