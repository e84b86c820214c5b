// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};
use serde::Serialize;

use crate::iam::CurrentUser;

pub const STYLESHEET: &str = "/builtin/style.css";
pub const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Values every page layout needs.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub app_name: String,
    pub description: String,
    pub stylesheet: &'static str,
    pub htmx_script: &'static str,
    pub user: Option<CurrentUser>,
}

impl SiteContext {
    pub fn new(app_name: &str, description: &str, user: Option<CurrentUser>) -> Self {
        Self {
            app_name: app_name.to_string(),
            description: description.to_string(),
            stylesheet: STYLESHEET,
            htmx_script: HTMX_SCRIPT,
            user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            site => SiteContext::new(&self.app_name, "", None)
        }
    }
}
