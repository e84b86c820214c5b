// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{
    CACHE_CONTROL, CONTENT_SECURITY_POLICY, HeaderName, HeaderValue, PRAGMA,
    X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const PUBLIC_ASSET_CACHE_CONTROL: &str = "public, max-age=86400";
const DYNAMIC_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";
const DEFAULT_CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' https://unpkg.com; object-src 'none'; frame-ancestors 'self'; base-uri 'self'; form-action 'self';";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CacheClass {
    /// Authenticated or credential-bearing pages.
    NoStore,
    /// Embedded stylesheets and similar assets.
    PublicAsset,
    /// Everything else keeps whatever the handler set.
    Untouched,
}

fn cache_class(path: &str) -> CacheClass {
    if path == "/admin" || path.starts_with("/admin/") || path.starts_with("/login") {
        CacheClass::NoStore
    } else if path.starts_with("/builtin/") {
        CacheClass::PublicAsset
    } else {
        CacheClass::Untouched
    }
}

/// Security and caching headers applied to every response.
#[derive(Default)]
pub struct Headers;

impl Headers {
    pub fn new() -> Self {
        Headers
    }
}

impl<S, B> Transform<S, ServiceRequest> for Headers
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = HeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(HeadersMiddleware {
            service: Arc::new(service),
        })
    }
}

pub struct HeadersMiddleware<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for HeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            let headers = res.headers_mut();
            headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
            headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
            headers.insert(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            );
            headers.insert(
                HeaderName::from_static("permissions-policy"),
                HeaderValue::from_static(
                    "accelerometer=(), camera=(), geolocation=(), gyroscope=(), microphone=(), payment=(), usb=()",
                ),
            );
            if !headers.contains_key(CONTENT_SECURITY_POLICY) {
                headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(DEFAULT_CSP));
            }

            match cache_class(res.request().path()) {
                CacheClass::NoStore => {
                    let headers = res.headers_mut();
                    headers.insert(CACHE_CONTROL, HeaderValue::from_static(DYNAMIC_CACHE_CONTROL));
                    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
                }
                CacheClass::PublicAsset => {
                    res.headers_mut().insert(
                        CACHE_CONTROL,
                        HeaderValue::from_static(PUBLIC_ASSET_CACHE_CONTROL),
                    );
                }
                CacheClass::Untouched => {}
            }

            Ok(res)
        })
    }
}
