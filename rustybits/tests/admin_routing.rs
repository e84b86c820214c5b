// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::header::{CACHE_CONTROL, LOCATION};
use actix_web::{http::StatusCode, test};

#[actix_web::test]
async fn anonymous_browser_is_sent_to_login() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    for uri in ["/admin", "/admin/", "/admin/posts", "/admin/posts/new"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "{}", uri);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login", "{}", uri);
    }
}

#[actix_web::test]
async fn anonymous_htmx_request_gets_unauthorized_with_redirect_header() {
    let harness = common::TestHarness::new().await;
    let post = harness.seed_post("Keep Me", true, &[]).await;
    let app = test::init_service(harness.app()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/posts/{}", post.id))
        .insert_header(("HX-Request", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/login");

    harness
        .store
        .find_post(rustybits::store::PostLookup::Id(post.id))
        .await
        .expect("post survives");
}

#[actix_web::test]
async fn reader_is_forbidden() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(harness.reader_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Insufficient permissions");
}

#[actix_web::test]
async fn editor_and_admin_see_the_dashboard() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("Live One", true, &["go"]).await;
    harness.seed_post("Draft One", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    for cookie in [harness.editor_cookie(), harness.admin_cookie()] {
        let req = test::TestRequest::get().uri("/admin").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate"
        );

        let body = common::body_string(resp).await;
        assert!(body.contains("<strong>2</strong> posts"));
        assert!(body.contains("<strong>1</strong> published"));
        assert!(body.contains("<strong>1</strong> drafts"));
        assert!(body.contains("<strong>1</strong> tags"));
        assert!(body.contains("Draft One"));
    }
}

#[actix_web::test]
async fn forged_session_cookie_is_treated_as_anonymous() {
    let harness = common::TestHarness::new().await;
    let app = test::init_service(harness.app()).await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(actix_web::cookie::Cookie::new(
            "rustybits_session",
            "not-a-real-token",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let cleared = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "rustybits_session")
        .expect("stale cookie is cleared");
    assert_eq!(cleared.value(), "");
}

#[actix_web::test]
async fn dashboard_queues_the_oldest_drafts_first() {
    let harness = common::TestHarness::new().await;
    harness.seed_post("First Draft", false, &[]).await;
    harness.seed_post("Already Live", true, &[]).await;
    harness.seed_post("Second Draft", false, &[]).await;
    let app = test::init_service(harness.app()).await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(harness.editor_cookie())
        .to_request();
    let body = common::body_string(test::call_service(&app, req).await).await;

    let queue = &body[body.find("class=\"draft-queue\"").expect("draft queue")..];
    let first = queue.find("First Draft").expect("first draft queued");
    let second = queue.find("Second Draft").expect("second draft queued");
    assert!(first < second);
    assert!(!queue.contains("Already Live"));
}
