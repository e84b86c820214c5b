// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::HttpResponse;
use minijinja::Value;

mod context;
mod engine;

pub use context::{ErrorPageContext, SiteContext};
pub use engine::{MiniJinjaEngine, TemplateEngine};

/// Render a minijinja template with the given context
pub fn render_minijinja_template(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> Result<String, minijinja::Error> {
    engine.render(template_name, context)
}

/// Render into a `200 text/html` response, or `None` after logging a render failure.
pub fn render_html(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> Option<HttpResponse> {
    match engine.render(template_name, context) {
        Ok(html) => Some(
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html),
        ),
        Err(err) => {
            log::error!("Failed to render template {}: {}", template_name, err);
            None
        }
    }
}
