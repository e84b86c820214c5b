// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BlogStore, StoreError, User, UserRow};
use crate::roles::Role;

impl BlogStore {
    pub async fn find_user_by_id(&self, id: i64) -> Result<User, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, email, password_hash, role FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;
        row.ok_or_else(|| StoreError::not_found("user"))?.try_into()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, email, password_hash, role FROM users WHERE email = ?")
                .bind(email.trim())
                .fetch_optional(self.pool())
                .await?;
        row.ok_or_else(|| StoreError::not_found("user"))?.try_into()
    }

    pub async fn count_users(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StoreError::Validation("Email is required".to_string()));
        }

        let result = sqlx::query("INSERT INTO users (email, password_hash, role) VALUES (?, ?, ?)")
            .bind(email)
            .bind(password_hash)
            .bind(role.as_str())
            .execute(self.pool())
            .await?;

        log::info!("Created user {} with role {}", email, role);
        Ok(User {
            id: result.last_insert_rowid(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
        })
    }
}
