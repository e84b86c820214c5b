// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::iam::{AuthRequest, UserServiceError, UserServices};
use crate::login::types::{LoginForm, LoginFormState};
use crate::public::error;
use crate::templates::render_minijinja_template;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use minijinja::context;

const LOGIN_REDIRECT: &str = "/admin";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub(super) async fn login_page(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.is_authenticated() {
        return Ok(redirect(LOGIN_REDIRECT));
    }

    render_login(
        &req,
        app_state.as_ref(),
        &LoginFormState::default(),
        StatusCode::OK,
    )
}

pub(super) async fn login_submit(
    req: HttpRequest,
    form: web::Form<LoginForm>,
    user_services: web::Data<UserServices>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let form = form.into_inner();

    let user = match user_services
        .authenticate(form.email.trim(), &form.password)
        .await
    {
        Ok(user) => user,
        Err(UserServiceError::InvalidCredentials) => {
            return render_login(
                &req,
                app_state.as_ref(),
                &LoginFormState::failed(&form.email, INVALID_CREDENTIALS),
                StatusCode::BAD_REQUEST,
            );
        }
        Err(err) => {
            log::error!("Login failed for {}: {}", form.email.trim(), err);
            return error::internal_error(app_state.as_ref());
        }
    };

    let cookie = match user_services.issue_session_cookie(&user) {
        Ok(cookie) => cookie,
        Err(err) => {
            log::error!("Failed to issue session for {}: {}", user.email, err);
            return error::internal_error(app_state.as_ref());
        }
    };

    log::info!("User {} logged in", user.email);
    Ok(HttpResponse::Found()
        .cookie(cookie)
        .insert_header((LOCATION, LOGIN_REDIRECT))
        .finish())
}

/// Handle logout
pub(super) async fn logout(
    req: HttpRequest,
    user_services: web::Data<UserServices>,
) -> Result<HttpResponse> {
    if let Some(user) = req.current_user() {
        log::info!("User {} logged out", user.email);
    }

    Ok(HttpResponse::Found()
        .cookie(user_services.jwt_service().create_logout_cookie())
        .insert_header((LOCATION, "/"))
        .finish())
}

fn render_login(
    req: &HttpRequest,
    app_state: &AppState,
    state: &LoginFormState,
    status: StatusCode,
) -> Result<HttpResponse> {
    let context = context! {
        site => app_state.site(req),
        email => &state.email,
        error => &state.error,
    };

    match render_minijinja_template(app_state.template_engine(), "login.html", context) {
        Ok(html) => Ok(HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(err) => {
            log::error!("Failed to render login page: {}", err);
            error::internal_error(app_state)
        }
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_string()))
        .finish()
}
