// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use crate::iam::generate_secret_hex;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKERS: u16 = 4;
const SESSION_SECRET_BYTES: usize = 32;

/// Write a default `config.yaml` with a fresh session secret unless one exists.
pub fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let config_path = root.join("config.yaml");

    if config_path.exists() {
        return Ok(false);
    }

    let contents = default_config_yaml(&generate_secret_hex(SESSION_SECRET_BYTES));

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    log_action(format!(
        "created config.yaml (http://{}:{})",
        DEFAULT_HOST, DEFAULT_PORT
    ));

    Ok(true)
}

fn default_config_yaml(session_secret: &str) -> String {
    format!(
        "server:\n  host: \"{host}\"\n  port: {port}\n  workers: {workers}\n\napp:\n  name: \"RustyBits\"\n  description: \"A personal blog\"\n\nsession:\n  secret: \"{session_secret}\"\n  expiration_hours: 168\n  secure_cookie: false\n\nlogging:\n  level: \"info\"\n",
        host = DEFAULT_HOST,
        port = DEFAULT_PORT,
        workers = DEFAULT_WORKERS,
        session_secret = session_secret,
    )
}
