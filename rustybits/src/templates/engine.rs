// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{DateTime, Utc};
use minijinja::{Environment, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        env.add_filter("date", format_date);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// `{{ post.created_at|date }}`: RFC 3339 timestamp to "January 2, 2006".
fn format_date(value: String) -> String {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(parsed) => parsed.with_timezone(&Utc).format("%B %-d, %Y").to_string(),
        Err(_) => value,
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        // Public pages
        "layout.html" => Some(include_str!("../public/templates/layout.html")),
        "home.html" => Some(include_str!("../public/templates/home.html")),
        "posts.html" => Some(include_str!("../public/templates/posts.html")),
        "post.html" => Some(include_str!("../public/templates/post.html")),
        "tags.html" => Some(include_str!("../public/templates/tags.html")),
        "pagination.html" => Some(include_str!("../public/templates/pagination.html")),

        // Error pages
        "error_404.html" => Some(include_str!("../public/templates/error_404.html")),
        "error_500.html" => Some(include_str!("../public/templates/error_500.html")),

        // Login
        "login.html" => Some(include_str!("../login/templates/login.html")),

        // Admin
        "admin/layout.html" => Some(include_str!("../admin/templates/layout.html")),
        "admin/dashboard.html" => Some(include_str!("../admin/templates/dashboard.html")),
        "admin/posts.html" => Some(include_str!("../admin/templates/posts.html")),
        "admin/post_form.html" => Some(include_str!("../admin/templates/post_form.html")),
        "admin/post_row.html" => Some(include_str!("../admin/templates/post_row.html")),
        "admin/post_status.html" => Some(include_str!("../admin/templates/post_status.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}
