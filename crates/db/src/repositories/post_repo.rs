//! Repository for the `posts` table.

use clinic_core::post::POST_PUBLISHED;
use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost, UpdatedPost};

/// Column list over `posts p LEFT JOIN users u`.
const COLUMNS: &str = "p.id, p.author_id, u.name AS author_name, p.title, p.slug, p.content, \
                        p.excerpt, p.thumbnail, p.tags, p.seo, p.comments, p.views, p.likes, \
                        p.status, p.published_at, p.created_at, p.updated_at";

const JOIN: &str = "LEFT JOIN users u ON u.id = p.author_id";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post under an already resolved `slug`.
    ///
    /// `published_at` is stamped when the post is created as published.
    pub async fn create(
        pool: &PgPool,
        author_id: Option<DbId>,
        slug: &str,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO posts
                    (author_id, title, slug, content, excerpt, thumbnail, tags, seo,
                     status, published_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'draft'),
                        CASE WHEN $9::TEXT = $10 THEN NOW() END)
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.thumbnail)
            .bind(&input.tags)
            .bind(&input.seo)
            .bind(&input.status)
            .bind(POST_PUBLISHED)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts p {JOIN} WHERE p.id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts, newest first, optionally filtered by status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts p {JOIN}
             WHERE ($1::TEXT IS NULL OR p.status = $1)
             ORDER BY COALESCE(p.published_at, p.created_at) DESC, p.id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only non-`None` fields are applied.
    ///
    /// The previous status is read under a row lock, so of several concurrent
    /// publishes only one sees the post leave `draft`. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<UpdatedPost>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE posts SET
                    title = COALESCE($2, posts.title),
                    slug = COALESCE($3, posts.slug),
                    content = COALESCE($4, posts.content),
                    excerpt = COALESCE($5, posts.excerpt),
                    thumbnail = COALESCE($6, posts.thumbnail),
                    tags = COALESCE($7, posts.tags),
                    seo = COALESCE($8, posts.seo),
                    status = COALESCE($9, posts.status),
                    published_at = CASE
                        WHEN $9::TEXT = $10 AND posts.published_at IS NULL THEN NOW()
                        ELSE posts.published_at
                    END
                FROM (SELECT id, status FROM posts WHERE id = $1 FOR UPDATE) old
                WHERE posts.id = old.id
                RETURNING posts.*, old.status AS previous_status
             )
             SELECT {COLUMNS}, p.previous_status FROM p {JOIN}"
        );
        sqlx::query_as::<_, UpdatedPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.thumbnail)
            .bind(&input.tags)
            .bind(&input.seo)
            .bind(&input.status)
            .bind(POST_PUBLISHED)
            .fetch_optional(pool)
            .await
    }

    /// Increment the view counter, treating a null counter as zero.
    ///
    /// Returns the new count, or `None` if the post does not exist.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE posts SET views = COALESCE(views, 0) + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
