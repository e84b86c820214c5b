// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

pub const HX_REQUEST: &str = "HX-Request";
pub const HX_TRIGGER: &str = "HX-Trigger";
pub const HX_REDIRECT: &str = "HX-Redirect";

/// True when the request was issued by htmx and expects a fragment back.
pub fn is_htmx(req: &HttpRequest) -> bool {
    headers_mark_htmx(req.headers())
}

pub fn headers_mark_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn detects_htmx_marker() {
        let req = TestRequest::default()
            .insert_header((HX_REQUEST, "true"))
            .to_http_request();
        assert!(is_htmx(&req));

        let req = TestRequest::default()
            .insert_header((HX_REQUEST, "false"))
            .to_http_request();
        assert!(!is_htmx(&req));

        assert!(!is_htmx(&TestRequest::default().to_http_request()));
    }
}
