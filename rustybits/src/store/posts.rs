// This file is part of the product RustyBits.
// SPDX-FileCopyrightText: 2026 The RustyBits Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::tags::{reconcile_tags, replace_post_tags};
use super::{
    BlogStore, Post, PostDraft, PostFilter, PostLookup, PostOrder, PostRow, PostStats,
    StoreError, Tag,
};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use std::collections::HashMap;

const POST_COLUMNS: &str =
    "SELECT id, title, slug, content, excerpt, published, created_at, updated_at FROM posts";

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &PostFilter) {
    builder.push(" WHERE 1 = 1");
    if let Some(published) = filter.published {
        builder.push(" AND published = ").push_bind(published);
    }
    if let Some(tag) = &filter.tag {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = posts.id AND t.name = ",
            )
            .push_bind(tag.clone())
            .push(")");
    }
}

impl BlogStore {
    pub async fn find_posts(
        &self,
        filter: &PostFilter,
        order: PostOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, StoreError> {
        let mut builder = QueryBuilder::<Sqlite>::new(POST_COLUMNS);
        push_filter(&mut builder, filter);
        builder.push(order.sql());
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(offset);

        let rows: Vec<PostRow> = builder.build_query_as().fetch_all(self.pool()).await?;
        self.attach_tags(rows).await
    }

    pub async fn count_posts(&self, filter: &PostFilter) -> Result<i64, StoreError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM posts");
        push_filter(&mut builder, filter);
        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    pub async fn find_post(&self, lookup: PostLookup<'_>) -> Result<Post, StoreError> {
        let mut builder = QueryBuilder::<Sqlite>::new(POST_COLUMNS);
        match lookup {
            PostLookup::Id(id) => {
                builder.push(" WHERE id = ").push_bind(id);
            }
            PostLookup::PublishedSlug(slug) => {
                builder
                    .push(" WHERE published = 1 AND slug = ")
                    .push_bind(slug.to_string());
            }
        }

        let row: Option<PostRow> = builder
            .build_query_as()
            .fetch_optional(self.pool())
            .await?;
        let row = row.ok_or_else(|| StoreError::not_found("post"))?;
        let mut posts = self.attach_tags(vec![row]).await?;
        posts.pop().ok_or_else(|| StoreError::not_found("post"))
    }

    /// Load every tag of `rows` in one query, ordered by tag name.
    async fn attach_tags(&self, rows: Vec<PostRow>) -> Result<Vec<Post>, StoreError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT pt.post_id, t.id, t.name FROM post_tags pt \
             JOIN tags t ON t.id = pt.tag_id WHERE pt.post_id IN (",
        );
        let mut ids = builder.separated(", ");
        for row in &rows {
            ids.push_bind(row.id);
        }
        ids.push_unseparated(") ORDER BY t.name");

        let links: Vec<(i64, i64, String)> =
            builder.build_query_as().fetch_all(self.pool()).await?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for (post_id, id, name) in links {
            by_post.entry(post_id).or_default().push(Tag { id, name });
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = by_post.remove(&row.id).unwrap_or_default();
                row.into_post(tags)
            })
            .collect())
    }

    /// Insert a post and reconcile its tags in a single transaction.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, StoreError> {
        draft.validate()?;
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;
        let tags = reconcile_tags(&mut tx, &draft.tags).await?;
        let result = sqlx::query(
            "INSERT INTO posts (title, slug, content, excerpt, published, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(draft.title.trim())
        .bind(draft.slug())
        .bind(&draft.content)
        .bind(&draft.excerpt)
        .bind(draft.published)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        let post_id = result.last_insert_rowid();
        replace_post_tags(&mut tx, post_id, &tags).await?;
        tx.commit().await?;

        log::info!("Created post {} ('{}')", post_id, draft.slug());
        self.find_post(PostLookup::Id(post_id)).await
    }

    /// Rewrite a post (slug regenerated from the title) and replace its tags.
    pub async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post, StoreError> {
        draft.validate()?;

        let mut tx = self.pool().begin().await?;
        let result = sqlx::query(
            "UPDATE posts SET title = ?, slug = ?, content = ?, excerpt = ?, published = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(draft.title.trim())
        .bind(draft.slug())
        .bind(&draft.content)
        .bind(&draft.excerpt)
        .bind(draft.published)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("post"));
        }

        let tags = reconcile_tags(&mut tx, &draft.tags).await?;
        replace_post_tags(&mut tx, id, &tags).await?;
        tx.commit().await?;

        log::info!("Updated post {} ('{}')", id, draft.slug());
        self.find_post(PostLookup::Id(id)).await
    }

    pub async fn set_published(&self, id: i64, published: bool) -> Result<Post, StoreError> {
        let result = sqlx::query("UPDATE posts SET published = ?, updated_at = ? WHERE id = ?")
            .bind(published)
            .bind(Utc::now())
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("post"));
        }
        self.find_post(PostLookup::Id(id)).await
    }

    pub async fn toggle_published(&self, id: i64) -> Result<Post, StoreError> {
        let result =
            sqlx::query("UPDATE posts SET published = NOT published, updated_at = ? WHERE id = ?")
                .bind(Utc::now())
                .bind(id)
                .execute(self.pool())
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("post"));
        }
        self.find_post(PostLookup::Id(id)).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), StoreError> {
        let mut tx = self.pool().begin().await?;
        sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("post"));
        }
        tx.commit().await?;

        log::info!("Deleted post {}", id);
        Ok(())
    }

    pub async fn post_stats(&self) -> Result<PostStats, StoreError> {
        let (total_posts, published_posts): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(published), 0) FROM posts")
                .fetch_one(self.pool())
                .await?;
        Ok(PostStats {
            total_posts,
            published_posts,
            draft_posts: total_posts - published_posts,
            total_tags: self.count_tags().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, published: bool, tags: &[&str]) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: format!("Body of {}", title),
            excerpt: String::new(),
            published,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    async fn store() -> BlogStore {
        BlogStore::connect_in_memory().await.expect("store")
    }

    #[actix_web::test]
    async fn create_post_derives_slug_and_loads_tags() {
        let store = store().await;
        let post = store
            .create_post(&draft("Hello, World!", true, &["rust", "go"]))
            .await
            .expect("create");

        assert_eq!(post.slug, "hello-world");
        assert!(post.published);
        assert_eq!(post.tag_names(), vec!["go".to_string(), "rust".to_string()]);
    }

    #[actix_web::test]
    async fn duplicate_slug_rolls_back_new_tags() {
        let store = store().await;
        store
            .create_post(&draft("Hello", false, &[]))
            .await
            .expect("first");

        let err = store
            .create_post(&draft("hello", false, &["fresh"]))
            .await
            .expect_err("duplicate slug");

        assert!(matches!(err, StoreError::Storage(_)));
        assert!(store.find_tag_by_name("fresh").await.unwrap_err().is_not_found());
        assert_eq!(store.count_posts(&PostFilter::all()).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn update_regenerates_slug_and_replaces_tags() {
        let store = store().await;
        let post = store
            .create_post(&draft("First Title", false, &["go", "tutorial"]))
            .await
            .expect("create");

        let updated = store
            .update_post(post.id, &draft("Second Title", true, &["go"]))
            .await
            .expect("update");

        assert_eq!(updated.slug, "second-title");
        assert!(updated.published);
        assert_eq!(updated.tag_names(), vec!["go".to_string()]);
        assert!(store.find_tag_by_name("tutorial").await.is_ok());
    }

    #[actix_web::test]
    async fn update_missing_post_is_not_found() {
        let store = store().await;
        let err = store
            .update_post(99, &draft("Ghost", false, &["phantom"]))
            .await
            .expect_err("missing");
        assert!(err.is_not_found());
        assert_eq!(store.count_tags().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn validation_runs_before_any_write() {
        let store = store().await;
        let err = store
            .create_post(&draft("  ", false, &["orphan"]))
            .await
            .expect_err("blank title");
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.count_tags().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn toggle_twice_restores_original_value() {
        let store = store().await;
        let post = store
            .create_post(&draft("Toggle me", false, &[]))
            .await
            .expect("create");

        let once = store.toggle_published(post.id).await.expect("toggle");
        assert!(once.published);
        let twice = store.toggle_published(post.id).await.expect("toggle");
        assert!(!twice.published);
    }

    #[actix_web::test]
    async fn set_published_is_explicit() {
        let store = store().await;
        let post = store
            .create_post(&draft("Explicit", false, &[]))
            .await
            .expect("create");
        assert!(store.set_published(post.id, true).await.unwrap().published);
        assert!(store.set_published(post.id, true).await.unwrap().published);
        assert!(store.set_published(404, true).await.unwrap_err().is_not_found());
    }

    #[actix_web::test]
    async fn published_slug_lookup_hides_drafts() {
        let store = store().await;
        store
            .create_post(&draft("Secret Draft", false, &[]))
            .await
            .expect("create");

        let err = store
            .find_post(PostLookup::PublishedSlug("secret-draft"))
            .await
            .expect_err("draft hidden");
        assert!(err.is_not_found());
    }

    #[actix_web::test]
    async fn filters_by_published_and_tag_with_pagination() {
        let store = store().await;
        for index in 0..12 {
            let tags: &[&str] = if index % 2 == 0 { &["even"] } else { &[] };
            store
                .create_post(&draft(&format!("Post {}", index), index != 11, tags))
                .await
                .expect("create");
        }

        let published = PostFilter::published();
        assert_eq!(store.count_posts(&published).await.unwrap(), 11);
        let page_two = store
            .find_posts(&published, PostOrder::Newest, 10, 10)
            .await
            .expect("page two");
        assert_eq!(page_two.len(), 1);
        assert_eq!(page_two[0].slug, "post-0");

        let even = PostFilter::published_with_tag("even");
        assert_eq!(store.count_posts(&even).await.unwrap(), 6);
        let posts = store
            .find_posts(&even, PostOrder::Newest, 10, 0)
            .await
            .expect("tagged");
        assert!(posts.iter().all(|post| post.tag_names() == vec!["even"]));

        let beyond = store
            .find_posts(&published, PostOrder::Newest, 10, 50)
            .await
            .expect("beyond");
        assert!(beyond.is_empty());
    }

    #[actix_web::test]
    async fn delete_clears_associations_but_keeps_tags() {
        let store = store().await;
        let post = store
            .create_post(&draft("Doomed", true, &["keep"]))
            .await
            .expect("create");

        store.delete_post(post.id).await.expect("delete");

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_tags")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(links, 0);
        assert!(store.find_tag_by_name("keep").await.is_ok());
        assert!(store.delete_post(post.id).await.unwrap_err().is_not_found());
    }

    #[actix_web::test]
    async fn drafts_filter_with_oldest_first() {
        let store = store().await;
        for (title, published) in [("First", false), ("Second", true), ("Third", false)] {
            store
                .create_post(&draft(title, published, &[]))
                .await
                .expect("create");
        }

        let drafts = store
            .find_posts(&PostFilter::drafts(), PostOrder::Oldest, 10, 0)
            .await
            .expect("drafts");
        let slugs: Vec<&str> = drafts.iter().map(|post| post.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "third"]);
        assert_eq!(store.count_posts(&PostFilter::drafts()).await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn stats_count_posts_and_tags() {
        let store = store().await;
        store.create_post(&draft("A", true, &["x"])).await.unwrap();
        store.create_post(&draft("B", false, &["y"])).await.unwrap();
        store.create_post(&draft("C", true, &[])).await.unwrap();

        let stats = store.post_stats().await.expect("stats");
        assert_eq!(stats.total_posts, 3);
        assert_eq!(stats.published_posts, 2);
        assert_eq!(stats.draft_posts, 1);
        assert_eq!(stats.total_tags, 2);
    }
}
