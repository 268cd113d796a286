use serde::Serialize;
use serde_json::{Map, Value};

use super::{DtoConfig, FromRecord, PlainRecord};
use crate::post::POST_DRAFT;

/// Blog post as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    /// Empty when the author account was removed.
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Stored value, unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// `thumbnail` resolved against the public base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub tags: Vec<Value>,
    pub seo: Map<String, Value>,
    pub comments: Vec<Value>,
    pub views: i64,
    pub likes: i64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FromRecord for PostDto {
    fn from_record(rec: &PlainRecord, config: &DtoConfig) -> Self {
        let thumbnail = rec.non_empty_string("thumbnail");
        let thumbnail_url = thumbnail.as_deref().map(|path| config.media_url(path));

        Self {
            id: rec.id("id"),
            author_id: rec.id("author_id"),
            author_name: rec.non_empty_string("author_name"),
            title: rec.string("title"),
            slug: rec.string("slug"),
            content: rec.string("content"),
            excerpt: rec.non_empty_string("excerpt"),
            thumbnail,
            thumbnail_url,
            tags: rec.array("tags"),
            seo: rec.object("seo"),
            comments: rec.array("comments"),
            views: rec.count("views"),
            likes: rec.count("likes"),
            status: rec.string_or("status", POST_DRAFT),
            published_at: rec.iso_date("published_at"),
            created_at: rec.iso_date("created_at"),
            updated_at: rec.iso_date("updated_at"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::to_dto;
    use serde_json::json;

    fn config() -> DtoConfig {
        DtoConfig::new("https://clinic.example")
    }

    #[test]
    fn null_views_become_zero() {
        let row = json!({"id": 5, "title": "T", "views": null, "likes": null});
        let dto: PostDto = to_dto(&row, &config());
        assert_eq!(dto.views, 0);
        assert_eq!(dto.likes, 0);
    }

    #[test]
    fn null_blobs_become_empty_shapes() {
        let row = json!({"id": 5, "tags": null, "seo": null, "comments": null});
        let out = serde_json::to_value(to_dto::<PostDto, _>(&row, &config())).unwrap();
        assert_eq!(out["tags"], json!([]));
        assert_eq!(out["seo"], json!({}));
        assert_eq!(out["comments"], json!([]));
    }

    #[test]
    fn thumbnail_is_kept_and_resolved() {
        let row = json!({"id": 5, "thumbnail": "uploads/posts/5.jpg"});
        let dto: PostDto = to_dto(&row, &config());
        assert_eq!(dto.thumbnail.as_deref(), Some("uploads/posts/5.jpg"));
        assert_eq!(
            dto.thumbnail_url.as_deref(),
            Some("https://clinic.example/uploads/posts/5.jpg")
        );
    }

    #[test]
    fn missing_thumbnail_has_no_url() {
        let out = serde_json::to_value(to_dto::<PostDto, _>(&json!({"id": 1}), &config())).unwrap();
        assert!(out.get("thumbnail").is_none());
        assert!(out.get("thumbnailUrl").is_none());
        assert_eq!(out["authorId"], "");
        assert_eq!(out["status"], "draft");
    }
}
