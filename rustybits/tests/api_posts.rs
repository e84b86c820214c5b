// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

#[actix_web::test]
async fn post_list_returns_published_posts_with_tags() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Api Live", true, &["go", "api"]).await;
    harness.seed_post("Api Draft", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], 1);
    let posts = body["posts"].as_array().expect("posts array");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Api Live");
    assert_eq!(posts[0]["slug"], "api-live");
    assert_eq!(posts[0]["published"], true);
    let tags: Vec<&str> = posts[0]["tags"]
        .as_array()
        .expect("tags array")
        .iter()
        .filter_map(|tag| tag["name"].as_str())
        .collect();
    assert_eq!(tags, vec!["api", "go"]);
}

#[actix_web::test]
async fn post_list_pages_by_ten() {
    let harness = common::TestHarness::new().await;
    for n in 1..=11 {
        harness.seed_post(&format!("Item {}", n), true, &[]).await;
    }
    let app = test::init_service(harness.app()).await;

    let first: Value = test::read_body_json(
        test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request()).await,
    )
    .await;
    assert_eq!(first["posts"].as_array().unwrap().len(), 10);

    let second: Value = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::get().uri("/api/posts?page=2").to_request(),
        )
        .await,
    )
    .await;
    assert_eq!(second["page"], 2);
    assert_eq!(second["posts"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn invalid_page_falls_back_to_the_first() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Only", true, &[]).await;
    let app = test::init_service(harness.app()).await;

    for uri in [
        "/api/posts?page=0",
        "/api/posts?page=-3",
        "/api/posts?page=abc",
        "/api/posts?page=%FF",
        "/api/posts?page=1&page=2",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["page"], 1, "{}", uri);
        assert_eq!(body["posts"].as_array().unwrap().len(), 1, "{}", uri);
    }
}

#[actix_web::test]
async fn single_post_by_id() {
    let harness = common::TestHarness::new().await;
    let post = harness.seed_post("By Id", true, &["go"]).await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], post.id);
    assert_eq!(body["title"], "By Id");
}

#[actix_web::test]
async fn missing_or_malformed_ids_are_not_found() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    for uri in ["/api/posts/999", "/api/posts/not-a-number"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post Not Found");
    }
}

#[actix_web::test]
async fn drafts_are_visible_to_editors_only() {
    let harness = common::TestHarness::new().await;
    let draft = harness.seed_post("Api Secret", false, &[]).await;
    let app = test::init_service(harness.app()).await;
    let uri = format!("/api/posts/{}", draft.id);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&uri)
        .cookie(harness.reader_cookie())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::get()
        .uri(&uri)
        .cookie(harness.editor_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["published"], false);
}
