// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{http::StatusCode, test};

#[actix_web::test]
async fn home_lists_only_published_posts() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Visible Post", true, &["rust"]).await;
    harness.seed_post("Hidden Draft", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = common::body_string(resp).await;
    assert!(body.contains("Test Blog"));
    assert!(body.contains("Visible Post"));
    assert!(body.contains("/tags/rust"));
    assert!(!body.contains("Hidden Draft"));
}

#[actix_web::test]
async fn home_shows_the_five_newest_posts() {
    let harness = common::TestHarness::new().await;
    for n in 1..=6 {
        harness.seed_post(&format!("Entry {}", n), true, &[]).await;
    }
    let app = test::init_service(harness.app()).await;

    let body = common::body_string(
        test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await,
    )
    .await;
    let shown = (1..=6)
        .filter(|n| body.contains(&format!("Entry {}<", n)))
        .count();
    assert_eq!(shown, 5);
}

#[actix_web::test]
async fn post_page_renders_by_slug() {
    let harness = common::TestHarness::new().await;
    let post = harness.seed_post("Hello World", true, &["go"]).await;
    assert_eq!(post.slug, "hello-world");
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/posts/hello-world").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains("<h1>Hello World</h1>"));
    assert!(body.contains("Body of Hello World"));
}

#[actix_web::test]
async fn drafts_and_unknown_slugs_are_not_found() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Secret Draft", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    for uri in ["/posts/secret-draft", "/posts/does-not-exist"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body = common::body_string(resp).await;
        assert!(body.contains("404"));
    }
}

#[actix_web::test]
async fn post_list_paginates() {
    let harness = common::TestHarness::new().await;
    for n in 1..=12 {
        harness.seed_post(&format!("Paged {}", n), true, &[]).await;
    }
    let app = test::init_service(harness.app()).await;

    let first = common::body_string(
        test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await,
    )
    .await;
    assert!(first.contains("All posts"));
    assert!(first.contains("?page=2"));

    let second = common::body_string(
        test::call_service(
            &app,
            test::TestRequest::get().uri("/posts?page=2").to_request(),
        )
        .await,
    )
    .await;
    let shown = (1..=12)
        .filter(|n| second.contains(&format!("Paged {}<", n)))
        .count();
    assert_eq!(shown, 2);
}

#[actix_web::test]
async fn malformed_page_parameters_show_the_first_page() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Front Page", true, &["go"]).await;
    let app = test::init_service(harness.app()).await;

    for uri in ["/posts?page=%FF", "/posts?page=1&page=3", "/tags/go?page=x&page=%zz"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert!(common::body_string(resp).await.contains("Front Page"), "{}", uri);
    }
}

#[actix_web::test]
async fn tag_page_filters_published_posts() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Tagged Live", true, &["go"]).await;
    harness.seed_post("Tagged Draft", false, &["go"]).await;
    harness.seed_post("Other Topic", true, &["rust"]).await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/tags/go").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains("Posts tagged: go"));
    assert!(body.contains("Tagged Live"));
    assert!(!body.contains("Tagged Draft"));
    assert!(!body.contains("Other Topic"));
}

#[actix_web::test]
async fn tagged_post_links_to_encoded_tag_pages() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Spaced Tags", true, &["web dev", "go"]).await;
    let app = test::init_service(harness.app()).await;

    for uri in ["/", "/posts", "/posts/spaced-tags", "/tags"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body = common::body_string(resp).await;
        assert!(body.contains("href=\"/tags/web%20dev\""), "{}", uri);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/tags/web%20dev").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains("Posts tagged: web dev"));
    assert!(body.contains("Spaced Tags"));
}

#[actix_web::test]
async fn unknown_tag_renders_an_empty_list() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/tags/nothing-here").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains("No posts found."));
}

#[actix_web::test]
async fn tag_cloud_counts_posts() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("One", true, &["go", "web"]).await;
    harness.seed_post("Two", true, &["go"]).await;
    let app = test::init_service(harness.app()).await;

    let body = common::body_string(
        test::call_service(&app, test::TestRequest::get().uri("/tags").to_request()).await,
    )
    .await;
    assert!(body.contains("#go</a> <span class=\"count\">(2)</span>"));
    assert!(body.contains("#web</a> <span class=\"count\">(1)</span>"));
}

#[actix_web::test]
async fn rss_feed_lists_published_posts() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Feed & Friends", true, &[]).await;
    harness.seed_post("Not In Feed", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/rss").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/rss+xml"));

    let body = common::body_string(resp).await;
    assert!(body.contains("<title>Feed &amp; Friends</title>"));
    assert!(body.contains("http://blog.test/posts/feed--friends"));
    assert!(!body.contains("Not In Feed"));
}

#[actix_web::test]
async fn unknown_paths_use_the_not_found_page() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/no/such/page").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn builtin_stylesheet_is_cacheable() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/builtin/style.css").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("cache-control").unwrap(),
        "public, max-age=86400"
    );
}
