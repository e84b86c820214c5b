// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::public::error;
use crate::templates::render_minijinja_template;
use crate::util::htmx::HX_TRIGGER;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, Result};
use minijinja::Value;

/// Render an admin template with the given status, falling back to the 500 page.
pub fn render_admin(
    app_state: &AppState,
    template_name: &str,
    context: Value,
    status_code: StatusCode,
) -> Result<HttpResponse> {
    match render_minijinja_template(app_state.template_engine(), template_name, context) {
        Ok(html) => Ok(HttpResponse::build(status_code)
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(err) => {
            log::error!("Failed to render {}: {}", template_name, err);
            error::internal_error(app_state)
        }
    }
}

/// htmx fragment response, optionally announcing `trigger` to the page.
pub fn render_fragment(
    app_state: &AppState,
    template_name: &str,
    context: Value,
    trigger: Option<&str>,
) -> Result<HttpResponse> {
    match render_minijinja_template(app_state.template_engine(), template_name, context) {
        Ok(html) => {
            let mut builder = HttpResponse::Ok();
            builder.content_type("text/html; charset=utf-8");
            if let Some(trigger) = trigger {
                builder.insert_header((HX_TRIGGER, trigger));
            }
            Ok(builder.body(html))
        }
        Err(err) => {
            log::error!("Failed to render fragment {}: {}", template_name, err);
            error::internal_error(app_state)
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_string()))
        .finish()
}

/// Numeric id from a path segment; anything else is treated as a missing post.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("new"), None);
    }
}
