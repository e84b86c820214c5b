// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};

/// `POST /login` form body. Missing fields read as empty so they fail as bad credentials.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Values the login template needs. The password is never echoed back.
#[derive(Debug, Default, Serialize)]
pub struct LoginFormState {
    pub email: String,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn failed(email: &str, error: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            error: Some(error.to_string()),
        }
    }
}
