//! Blog post entity model and DTOs.

use clinic_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table joined with the author's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<serde_json::Value>,
    pub seo: Option<serde_json::Value>,
    pub comments: Option<serde_json::Value>,
    pub views: Option<i32>,
    pub likes: Option<i32>,
    pub status: String,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post as written by an update, with the status it held before.
#[derive(Debug, Clone, FromRow)]
pub struct UpdatedPost {
    #[sqlx(flatten)]
    pub post: Post,
    pub previous_status: String,
}

/// DTO for creating a post. `slug` is derived from the title when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<serde_json::Value>,
    pub seo: Option<serde_json::Value>,
    pub status: Option<String>,
}

/// DTO for updating a post. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<serde_json::Value>,
    pub seo: Option<serde_json::Value>,
    pub status: Option<String>,
}
