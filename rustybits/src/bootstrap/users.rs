// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action, log_warning};
use crate::iam::{UserServices, generate_password};
use crate::roles::Role;

pub const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD_LENGTH: usize = 16;

/// Create the default administrator when the users table is empty.
///
/// The generated password is printed once; nothing else records it.
pub async fn ensure_admin_user(services: &UserServices) -> Result<bool, BootstrapError> {
    if services.store().count_users().await? > 0 {
        return Ok(false);
    }

    let password = generate_password(ADMIN_PASSWORD_LENGTH);
    services
        .create_user(ADMIN_EMAIL, &password, Role::Admin)
        .await?;

    log_action(format!("created administrator account {}", ADMIN_EMAIL));
    log_warning(format!(
        "{} password: {} (change this immediately)",
        ADMIN_EMAIL, password
    ));

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BlogStore;
    use crate::util::test_config::test_config;

    #[actix_web::test]
    async fn creates_admin_once() {
        let store = BlogStore::connect_in_memory().await.expect("store");
        let services = UserServices::new(&test_config(), store).expect("services");

        assert!(ensure_admin_user(&services).await.expect("first run"));
        assert!(!ensure_admin_user(&services).await.expect("second run"));

        let admin = services
            .store()
            .find_user_by_email(ADMIN_EMAIL)
            .await
            .expect("admin exists");
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.password_hash.starts_with("$argon2id$"));
        assert_eq!(services.store().count_users().await.expect("count"), 1);
    }

    #[actix_web::test]
    async fn existing_users_are_left_alone() {
        let store = BlogStore::connect_in_memory().await.expect("store");
        let services = UserServices::new(&test_config(), store).expect("services");
        services
            .create_user("editor@example.com", "pw", Role::Editor)
            .await
            .expect("user");

        assert!(!ensure_admin_user(&services).await.expect("bootstrap"));
        assert!(
            services
                .store()
                .find_user_by_email(ADMIN_EMAIL)
                .await
                .expect_err("no admin")
                .is_not_found()
        );
    }
}
