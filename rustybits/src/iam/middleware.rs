// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::web::Data;
use actix_web::{HttpMessage, HttpRequest};
use serde::Serialize;
use std::future::{Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use crate::iam::user_services::{SessionCheck, UserServices};
use crate::roles::Role;
use crate::store::User;

/// Identity attached to a request that carried a valid session.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Trait to add authentication methods to HttpRequest
pub trait AuthRequest {
    fn current_user(&self) -> Option<CurrentUser>;
    fn is_authenticated(&self) -> bool;
    fn has_role(&self, role: Role) -> bool;
}

impl AuthRequest for HttpRequest {
    fn current_user(&self) -> Option<CurrentUser> {
        self.extensions().get::<CurrentUser>().cloned()
    }

    fn is_authenticated(&self) -> bool {
        self.extensions().get::<CurrentUser>().is_some()
    }

    fn has_role(&self, role: Role) -> bool {
        self.extensions()
            .get::<CurrentUser>()
            .map(|user| user.role.satisfies(role))
            .unwrap_or(false)
    }
}

impl AuthRequest for ServiceRequest {
    fn current_user(&self) -> Option<CurrentUser> {
        self.extensions().get::<CurrentUser>().cloned()
    }

    fn is_authenticated(&self) -> bool {
        self.extensions().get::<CurrentUser>().is_some()
    }

    fn has_role(&self, role: Role) -> bool {
        self.extensions()
            .get::<CurrentUser>()
            .map(|user| user.role.satisfies(role))
            .unwrap_or(false)
    }
}

/// Optional authentication: resolves the session cookie when present, never rejects.
pub struct SessionMiddlewareFactory;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user_services = req.app_data::<Data<UserServices>>().cloned();
        let service = self.service.clone();

        Box::pin(async move {
            let mut clear_cookie = None;

            if let Some(user_services) = user_services {
                let jwt_service = user_services.jwt_service();
                let token = req
                    .cookie(jwt_service.cookie_name())
                    .map(|cookie| cookie.value().to_string())
                    .filter(|value| !value.is_empty());

                if let Some(token) = token {
                    match user_services.validate_session(&token).await {
                        SessionCheck::Valid(user) => {
                            req.extensions_mut().insert(CurrentUser::from(user));
                        }
                        SessionCheck::Invalid => {
                            clear_cookie = Some(jwt_service.create_logout_cookie());
                        }
                        // Served as anonymous, the cookie stays for the next request.
                        SessionCheck::Unavailable => {}
                    }
                }
            }

            let mut res = service.call(req).await?;

            if let Some(cookie) = clear_cookie {
                res.response_mut().add_cookie(&cookie).map_err(|e| {
                    log::error!("Failed to clear stale session cookie: {}", e);
                    actix_web::error::ErrorInternalServerError("Failed to clear session cookie")
                })?;
            }

            Ok(res)
        })
    }
}
