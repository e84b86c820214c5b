// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::jwt::{JwtError, JwtService};
use super::password::{PasswordError, hash_password, verify_password};
use crate::config::{Argon2Params, ValidatedConfig};
use crate::roles::Role;
use crate::store::{BlogStore, StoreError, User};
use actix_web::cookie::Cookie;
use std::fmt;

/// Login, session and account operations over the blog store.
pub struct UserServices {
    store: BlogStore,
    jwt_service: JwtService,
    password_params: Argon2Params,
    dummy_stored_hash: String,
}

pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Outcome of checking a session cookie.
#[derive(Debug)]
pub enum SessionCheck {
    Valid(User),
    /// Bad token or deleted account; the cookie should be dropped.
    Invalid,
    /// The account could not be loaded right now; the cookie is kept.
    Unavailable,
}

#[derive(Debug)]
pub enum UserServiceError {
    /// Unknown email or wrong password; deliberately indistinguishable.
    InvalidCredentials,
    Store(StoreError),
    Jwt(JwtError),
    Password(PasswordError),
}

impl fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserServiceError::InvalidCredentials => write!(f, "Invalid credentials"),
            UserServiceError::Store(err) => write!(f, "{}", err),
            UserServiceError::Jwt(err) => write!(f, "{}", err),
            UserServiceError::Password(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for UserServiceError {}

impl From<PasswordError> for UserServiceError {
    fn from(err: PasswordError) -> Self {
        UserServiceError::Password(err)
    }
}

impl From<StoreError> for UserServiceError {
    fn from(err: StoreError) -> Self {
        UserServiceError::Store(err)
    }
}

impl From<JwtError> for UserServiceError {
    fn from(err: JwtError) -> Self {
        UserServiceError::Jwt(err)
    }
}

impl UserServices {
    pub fn new(config: &ValidatedConfig, store: BlogStore) -> UserServiceResult<Self> {
        let dummy_stored_hash = hash_password("dummy-password", &config.password)?;
        Ok(UserServices {
            store,
            jwt_service: JwtService::new(&config.session),
            password_params: config.password,
            dummy_stored_hash,
        })
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn store(&self) -> &BlogStore {
        &self.store
    }

    /// Verify an email/password pair. Unknown emails still pay for one hash verification.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserServiceResult<User> {
        let user = match self.store.find_user_by_email(email).await {
            Ok(user) => Some(user),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err.into()),
        };

        let stored_hash = user
            .as_ref()
            .map(|user| user.password_hash.as_str())
            .unwrap_or(self.dummy_stored_hash.as_str());

        let valid = match verify_password(password, stored_hash) {
            Ok(valid) => valid,
            Err(err) => {
                log::error!("Stored password hash for {} is unreadable: {}", email, err);
                false
            }
        };

        match user {
            Some(user) if valid => Ok(user),
            _ => {
                log::warn!("Failed login attempt for {}", email);
                Err(UserServiceError::InvalidCredentials)
            }
        }
    }

    /// Session cookie for a freshly authenticated user.
    pub fn issue_session_cookie<'a>(&self, user: &User) -> UserServiceResult<Cookie<'a>> {
        let token = self.jwt_service.create_token(user)?;
        Ok(self.jwt_service.create_auth_cookie(&token))
    }

    /// Resolve a session token to a live account.
    pub async fn validate_session(&self, token: &str) -> SessionCheck {
        let claims = match self.jwt_service.verify_token(token) {
            Ok(claims) => claims,
            Err(err) => {
                log::debug!("Rejected session token: {}", err);
                return SessionCheck::Invalid;
            }
        };

        let Some(user_id) = claims.user_id() else {
            return SessionCheck::Invalid;
        };
        match self.store.find_user_by_id(user_id).await {
            Ok(user) => SessionCheck::Valid(user),
            Err(err) if err.is_not_found() => {
                log::debug!("Session refers to missing user {}", user_id);
                SessionCheck::Invalid
            }
            Err(err) => {
                log::error!("Failed to load session user {}: {}", user_id, err);
                SessionCheck::Unavailable
            }
        }
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> UserServiceResult<User> {
        let password_hash = hash_password(password, &self.password_params)?;
        Ok(self.store.create_user(email, &password_hash, role).await?)
    }
}
