// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::StoreError;
use crate::content::slugify;
use crate::roles::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TagCount {
    pub name: String,
    pub post_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl Post {
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.name.clone()).collect()
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PostRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostRow {
    pub(crate) fn into_post(self, tags: Vec<Tag>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tags,
        }
    }
}

/// Values submitted for a post create or update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl PostDraft {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("Title is required".to_string()));
        }
        if self.slug().is_empty() {
            return Err(StoreError::Validation(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            published: post.published,
            tags: post.tag_names(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub published: Option<bool>,
    pub tag: Option<String>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn published() -> Self {
        Self {
            published: Some(true),
            tag: None,
        }
    }

    pub fn published_with_tag(tag: &str) -> Self {
        Self {
            published: Some(true),
            tag: Some(tag.to_string()),
        }
    }

    pub fn drafts() -> Self {
        Self {
            published: Some(false),
            tag: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    Newest,
    Oldest,
}

impl PostOrder {
    pub(crate) fn sql(&self) -> &'static str {
        match self {
            PostOrder::Newest => " ORDER BY created_at DESC, id DESC",
            PostOrder::Oldest => " ORDER BY created_at ASC, id ASC",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PostLookup<'a> {
    Id(i64),
    /// Slug match restricted to published posts.
    PublishedSlug(&'a str),
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PostStats {
    pub total_posts: i64,
    pub published_posts: i64,
    pub draft_posts: i64,
    pub total_tags: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(|err| {
            StoreError::Storage(format!("user {} has an invalid role: {}", row.id, err))
        })?;
        Ok(User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            role,
        })
    }
}
