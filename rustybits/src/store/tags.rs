// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BlogStore, StoreError, Tag, TagCount};
use sqlx::SqliteConnection;

/// Find or create a tag for every non-blank name, keeping input order and duplicates.
///
/// Runs on the caller's connection so it shares the surrounding transaction.
pub async fn reconcile_tags(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<Tag>, StoreError> {
    let mut tags = Vec::with_capacity(names.len());
    for name in names.iter().map(|name| name.trim()) {
        if name.is_empty() {
            continue;
        }

        let existing: Option<Tag> = sqlx::query_as("SELECT id, name FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        let tag = match existing {
            Some(tag) => tag,
            None => {
                let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
                    .bind(name)
                    .execute(&mut *conn)
                    .await?;
                log::debug!("Created tag '{}'", name);
                Tag {
                    id: result.last_insert_rowid(),
                    name: name.to_string(),
                }
            }
        };
        tags.push(tag);
    }
    Ok(tags)
}

/// Replace the full association set of a post.
pub(crate) async fn replace_post_tags(
    conn: &mut SqliteConnection,
    post_id: i64,
    tags: &[Tag],
) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut *conn)
        .await?;

    for tag in tags {
        sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(tag.id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

impl BlogStore {
    pub async fn list_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let tags = sqlx::query_as("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(self.pool())
            .await?;
        Ok(tags)
    }

    pub async fn find_tag_by_name(&self, name: &str) -> Result<Tag, StoreError> {
        let tag: Option<Tag> = sqlx::query_as("SELECT id, name FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool())
            .await?;
        tag.ok_or_else(|| StoreError::not_found("tag"))
    }

    pub async fn count_tags(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Tags attached to at least one published post, with those post counts.
    pub async fn list_tags_with_counts(&self) -> Result<Vec<TagCount>, StoreError> {
        let counts = sqlx::query_as(
            "SELECT t.name AS name, COUNT(p.id) AS post_count
             FROM tags t
             JOIN post_tags pt ON pt.tag_id = t.id
             JOIN posts p ON p.id = pt.post_id AND p.published = 1
             GROUP BY t.id, t.name
             ORDER BY t.name",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(counts)
    }
}
