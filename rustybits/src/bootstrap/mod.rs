// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use crate::iam::UserServiceError;
use crate::runtime_paths::RuntimePaths;
use crate::store::StoreError;
use std::error::Error;
use std::fmt;
use std::path::Path;

pub mod config;
pub mod root_guard;
pub mod users;

pub use users::ensure_admin_user;

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub runtime_paths: RuntimePaths,
    pub created_config: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
    Store(StoreError),
    Users(UserServiceError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
            BootstrapError::Store(err) => write!(f, "Bootstrap database error: {}", err),
            BootstrapError::Users(err) => write!(f, "Bootstrap account error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
            BootstrapError::Store(err) => Some(err),
            BootstrapError::Users(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

impl From<StoreError> for BootstrapError {
    fn from(err: StoreError) -> Self {
        BootstrapError::Store(err)
    }
}

impl From<UserServiceError> for BootstrapError {
    fn from(err: UserServiceError) -> Self {
        BootstrapError::Users(err)
    }
}

/// Prepare the runtime root and configuration. The database and the default
/// account are set up afterwards, once an async runtime is available.
pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let root_path = root_guard::ensure_root(root)?;

    let created_config = config::ensure_config(&root_path)?;

    let runtime_paths = RuntimePaths::from_root(&root_path)?;

    let validated_config = Config::load_and_validate(&runtime_paths.root)?;

    Ok(BootstrapResult {
        validated_config,
        runtime_paths,
        created_config,
    })
}

pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}

pub(crate) fn log_warning(message: impl AsRef<str>) {
    eprintln!("[bootstrap] WARNING: {}", message.as_ref());
}
