// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use actix_web::HttpRequest;

use crate::config::ValidatedConfig;
use crate::iam::AuthRequest;
use crate::public::error::ErrorRenderer;
use crate::store::BlogStore;
use crate::templates::{MiniJinjaEngine, SiteContext, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub store: BlogStore,
    pub app_name: String,
    pub description: String,
    pub base_url: String,
}

impl AppState {
    pub fn new(config: &ValidatedConfig, store: BlogStore) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(config.app.name.clone()),
            store,
            app_name: config.app.name.clone(),
            description: config.app.description.clone(),
            base_url: config.base_url(),
        }
    }

    /// Layout values for a page rendered on behalf of `req`.
    pub fn site(&self, req: &HttpRequest) -> SiteContext {
        SiteContext::new(&self.app_name, &self.description, req.current_user())
    }

    pub fn template_engine(&self) -> &dyn TemplateEngine {
        self.templates.as_ref()
    }
}
