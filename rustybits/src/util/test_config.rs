// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::config::{
    AppConfig, Argon2Params, LoggingConfig, ServerConfig, SessionConfig, ValidatedConfig,
};

/// Cheap Argon2 parameters so tests hash in milliseconds.
pub const TEST_ARGON2_PARAMS: Argon2Params = Argon2Params {
    memory_kib: 1024,
    iterations: 1,
    parallelism: 1,
};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 7080,
                    workers: 1,
                },
                app: AppConfig {
                    name: "Test Blog".to_string(),
                    description: "Test Description".to_string(),
                    base_url: Some("http://blog.test".to_string()),
                },
                database_url: "sqlite::memory:".to_string(),
                session: SessionConfig {
                    secret: "test-secret-test-secret-test-secret".to_string(),
                    issuer: "rustybits".to_string(),
                    audience: "rustybits-users".to_string(),
                    expiration_hours: 168,
                    cookie_name: "rustybits_session".to_string(),
                    secure_cookie: false,
                },
                password: TEST_ARGON2_PARAMS,
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
            },
        }
    }

    pub fn with_session_secret(mut self, secret: &str) -> Self {
        self.config.session.secret = secret.to_string();
        self
    }

    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.config.session.secure_cookie = secure;
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}

pub fn test_config() -> ValidatedConfig {
    TestConfigBuilder::new().build()
}
