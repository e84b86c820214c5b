// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::iam::AuthRequest;
use crate::roles::Role;
use crate::util::htmx::{HX_REDIRECT, headers_mark_htmx};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::LOCATION,
};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use std::future::{Ready, ready};

const LOGIN_PATH: &str = "/login";

/// Rejects anonymous requests: htmx callers get `401` + `HX-Redirect`, browsers a redirect to /login.
pub struct RequireUser;

impl<S, B> Transform<S, ServiceRequest> for RequireUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireUserService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireUserService { service }))
    }
}

pub struct RequireUserService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireUserService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !req.is_authenticated() {
            let htmx = headers_mark_htmx(req.headers());
            let (req, _) = req.into_parts();

            let response = if htmx {
                HttpResponse::Unauthorized()
                    .insert_header((HX_REDIRECT, LOGIN_PATH))
                    .finish()
            } else {
                HttpResponse::Found()
                    .insert_header((LOCATION, LOGIN_PATH))
                    .finish()
            };

            log::debug!("Anonymous request to {} sent to login", req.path());
            return Box::pin(async move {
                Ok(ServiceResponse::new(req, response.map_into_right_body()))
            });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}

/// Lets through users whose role is at least `required`; everyone else gets `403`.
pub struct RequireRole {
    required: Role,
}

impl RequireRole {
    pub fn new(required: Role) -> Self {
        Self { required }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleService {
            service,
            required: self.required,
        }))
    }
}

pub struct RequireRoleService<S> {
    service: S,
    required: Role,
}

impl<S, B> Service<ServiceRequest> for RequireRoleService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !req.has_role(self.required) {
            if let Some(user) = req.current_user() {
                log::warn!(
                    "User {} with role {} denied access to {}",
                    user.email,
                    user.role,
                    req.path()
                );
            }
            let (req, _) = req.into_parts();
            let response = HttpResponse::Forbidden()
                .json(json!({ "error": "Insufficient permissions" }))
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(req, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
