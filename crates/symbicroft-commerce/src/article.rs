//! Blog articles managed from the admin.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::format::{generate_excerpt, image_url, DEFAULT_EXCERPT_LEN};
use crate::ids::{ArticleId, UserId};
use crate::response::{ItemResponse, ListResponse, Resource};

/// An article as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Body HTML.
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub author_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Path relative to the uploads root.
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_published: bool,
    /// Unset until first published.
    #[serde(default)]
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Article {
    /// Preview text: the stored excerpt, or one cut from the body.
    pub fn preview(&self) -> String {
        if self.excerpt.trim().is_empty() {
            generate_excerpt(&self.content, DEFAULT_EXCERPT_LEN)
        } else {
            self.excerpt.clone()
        }
    }

    /// Cover image URL under `uploads_url`, or the placeholder.
    pub fn cover_url(&self, uploads_url: &str) -> String {
        image_url(uploads_url, self.image_url.as_deref())
    }
}

impl Resource for Article {
    const ONE: &'static str = "article";
    const MANY: &'static str = "articles";
    const DELETED: &'static str = "Article deleted successfully";
}

/// Normalized article list.
pub type ArticlesResponse = ListResponse<Article>;

/// Normalized single article.
pub type ArticleResponse = ItemResponse<Article>;

/// Body of `POST /articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticleData {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl CreateArticleData {
    /// Draft article with an excerpt taken from the body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            title: title.into(),
            excerpt: generate_excerpt(&content, DEFAULT_EXCERPT_LEN),
            content,
            is_published: None,
        }
    }

    pub fn published(mut self) -> Self {
        self.is_published = Some(true);
        self
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.title.trim().is_empty() {
            return Err(CommerceError::Validation("article title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(CommerceError::Validation("article content is required".to_string()));
        }
        Ok(())
    }
}

/// Body of `PUT /articles/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Backend paths for articles.
pub mod endpoints {
    use crate::ids::ArticleId;

    pub const ARTICLES: &str = "/articles";

    /// `/articles/{id}`
    pub fn article(id: ArticleId) -> String {
        format!("{ARTICLES}/{id}")
    }

    /// `/articles/{id}/image`, multipart field `image`.
    pub fn article_image(id: ArticleId) -> String {
        format!("{ARTICLES}/{id}/image")
    }
}
