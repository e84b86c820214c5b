// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const MIN_SESSION_SECRET_LEN: usize = 32;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub password: Argon2ParamsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub database_url: String,
    pub session: SessionConfig,
    pub password: Argon2Params,
    pub logging: LoggingConfig,
}

impl ValidatedConfig {
    /// Absolute site URL without a trailing slash, used for feed links.
    pub fn base_url(&self) -> String {
        match self.app.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => format!("http://{}:{}", self.server.host, self.server.port),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.logging.level).unwrap_or(LevelFilter::Info)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatabaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_session_issuer")]
    pub issuer: String,
    #[serde(default = "default_session_audience")]
    pub audience: String,
    #[serde(default = "default_session_expiration_hours")]
    pub expiration_hours: u64,
    #[serde(default = "default_session_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure_cookie: bool,
}

fn default_session_issuer() -> String {
    "rustybits".to_string()
}

fn default_session_audience() -> String {
    "rustybits-users".to_string()
}

fn default_session_expiration_hours() -> u64 {
    168
}

fn default_session_cookie_name() -> String {
    "rustybits_session".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Argon2ParamsConfig {
    #[serde(default)]
    pub memory_kib: Option<u32>,
    #[serde(default)]
    pub iterations: Option<u32>,
    #[serde(default)]
    pub parallelism: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

pub const DEFAULT_ARGON2_PARAMS: Argon2Params = Argon2Params {
    memory_kib: 19456,
    iterations: 2,
    parallelism: 1,
};

impl Default for Argon2Params {
    fn default() -> Self {
        DEFAULT_ARGON2_PARAMS
    }
}

impl Argon2Params {
    fn resolve(config: &Argon2ParamsConfig) -> Result<Self, ConfigError> {
        let resolved = Argon2Params {
            memory_kib: config.memory_kib.unwrap_or(DEFAULT_ARGON2_PARAMS.memory_kib),
            iterations: config.iterations.unwrap_or(DEFAULT_ARGON2_PARAMS.iterations),
            parallelism: config
                .parallelism
                .unwrap_or(DEFAULT_ARGON2_PARAMS.parallelism),
        };

        if resolved.memory_kib == 0 || resolved.iterations == 0 || resolved.parallelism == 0 {
            return Err(ConfigError::ValidationError(
                "password hashing params must be non-zero".to_string(),
            ));
        }

        if let Err(err) = argon2::Params::new(
            resolved.memory_kib,
            resolved.iterations,
            resolved.parallelism,
            None,
        ) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid Argon2id params: {}",
                err
            )));
        }

        Ok(resolved)
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join("config.yaml");
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Loads and validates configuration at startup. If validation fails, the application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        Self::load(root)?.validate(root)
    }

    pub fn validate(self, root: &Path) -> Result<ValidatedConfig, ConfigError> {
        Self::validate_server(&self.server)?;
        Self::validate_session(&self.session)?;
        Self::validate_logging(&self.logging)?;

        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name cannot be empty".to_string(),
            ));
        }

        let password = Argon2Params::resolve(&self.password)?;

        let database_url = match self.database.url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => format!("sqlite://{}", root.join("blog.db").display()),
        };

        Ok(ValidatedConfig {
            server: self.server,
            app: self.app,
            database_url,
            session: self.session,
            password,
            logging: self.logging,
        })
    }

    fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
        if server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }
        if server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_session(session: &SessionConfig) -> Result<(), ConfigError> {
        if session.secret.chars().count() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::ValidationError(format!(
                "session.secret must be at least {} characters",
                MIN_SESSION_SECRET_LEN
            )));
        }
        if session.expiration_hours < 1 {
            return Err(ConfigError::ValidationError(format!(
                "session.expiration_hours must be at least 1, got: {}",
                session.expiration_hours
            )));
        }
        if session.cookie_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "session.cookie_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        LevelFilter::from_str(&logging.level).map_err(|_| {
            ConfigError::ValidationError(format!(
                "logging.level must be one of off, error, warn, info, debug, trace; got: {}",
                logging.level
            ))
        })?;
        Ok(())
    }
}
