// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use rustybits::app_state::AppState;
use rustybits::config::ValidatedConfig;
use rustybits::headers;
use rustybits::iam::{SessionMiddlewareFactory, UserServices};
use rustybits::roles::Role;
use rustybits::store::{BlogStore, Post, PostDraft, User};
use rustybits::util::test_config;
use std::sync::Arc;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-password";
pub const EDITOR_EMAIL: &str = "editor@example.com";
pub const READER_EMAIL: &str = "reader@example.com";
const MEMBER_PASSWORD: &str = "member-password";

pub struct TestHarness {
    pub config: Arc<ValidatedConfig>,
    pub store: BlogStore,
    pub app_state: Arc<AppState>,
    pub user_services: Arc<UserServices>,
    pub admin_user: User,
    pub editor_user: User,
    pub reader_user: User,
}

impl TestHarness {
    pub async fn new() -> Self {
        let config = Arc::new(test_config());
        let store = BlogStore::connect_in_memory()
            .await
            .expect("in-memory store");
        let user_services = Arc::new(
            UserServices::new(&config, store.clone()).expect("user services"),
        );

        let admin_user = user_services
            .create_user(ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin)
            .await
            .expect("admin user");
        let editor_user = user_services
            .create_user(EDITOR_EMAIL, MEMBER_PASSWORD, Role::Editor)
            .await
            .expect("editor user");
        let reader_user = user_services
            .create_user(READER_EMAIL, MEMBER_PASSWORD, Role::Reader)
            .await
            .expect("reader user");

        let app_state = Arc::new(AppState::new(&config, store.clone()));

        Self {
            config,
            store,
            app_state,
            user_services,
            admin_user,
            editor_user,
            reader_user,
        }
    }

    pub fn session_cookie(&self, user: &User) -> Cookie<'static> {
        self.user_services
            .issue_session_cookie(user)
            .expect("session cookie")
    }

    pub fn admin_cookie(&self) -> Cookie<'static> {
        self.session_cookie(&self.admin_user)
    }

    pub fn editor_cookie(&self) -> Cookie<'static> {
        self.session_cookie(&self.editor_user)
    }

    pub fn reader_cookie(&self) -> Cookie<'static> {
        self.session_cookie(&self.reader_user)
    }

    pub async fn seed_post(&self, title: &str, published: bool, tags: &[&str]) -> Post {
        self.store
            .create_post(&PostDraft {
                title: title.to_string(),
                content: format!("Body of {}", title),
                excerpt: format!("About {}", title),
                published,
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
            })
            .await
            .expect("seed post")
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        build_test_app(
            self.config.clone(),
            self.app_state.clone(),
            self.user_services.clone(),
        )
    }
}

pub fn build_test_app(
    config: Arc<ValidatedConfig>,
    app_state: Arc<AppState>,
    user_services: Arc<UserServices>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(config))
        .app_data(web::Data::from(app_state))
        .app_data(web::Data::from(user_services))
        .wrap(headers::Headers::new())
        .wrap(SessionMiddlewareFactory)
        .configure(rustybits::configure_routes)
}

pub async fn body_string(resp: ServiceResponse) -> String {
    let body = actix_web::test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("utf8 body")
}
