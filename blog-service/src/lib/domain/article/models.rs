use std::collections::HashSet;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::errors::SlugError;
use crate::domain::profile::models::Profile;
use crate::domain::tag::models::TagName;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URL identifier derived from an article title.
///
/// The title is lowercased, each whitespace run becomes a single `-`, and
/// everything outside `[a-z0-9-]` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// # Errors
    /// * `Empty` - Nothing survives the projection
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        let mut slug = String::with_capacity(title.len());
        let mut in_whitespace = false;

        for c in title.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
            }
        }

        if slug.chars().all(|c| c == '-') {
            return Err(SlugError::Empty);
        }
        Ok(Self(slug))
    }

    /// Wrap a slug read back from storage.
    pub fn from_stored(slug: String) -> Self {
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Article aggregate, owned by exactly one author.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<TagName>,
    pub author_id: UserId,
    pub favorited_by: HashSet<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn favorites_count(&self) -> usize {
        self.favorited_by.len()
    }

    /// Apply the present fields of `command`.
    ///
    /// The slug is recomputed only when the title actually changes.
    pub fn apply(&mut self, command: UpdateArticleCommand) -> Result<(), SlugError> {
        if let Some(title) = command.title {
            if title != self.title {
                self.slug = Slug::from_title(&title)?;
                self.title = title;
            }
        }
        if let Some(description) = command.description {
            self.description = description;
        }
        if let Some(body) = command.body {
            self.body = body;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// An article as seen by a particular viewer.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub author: Profile,
    pub favorited: bool,
    pub favorites_count: usize,
}

#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub articles: Vec<ArticleView>,
    /// Number of matching articles ignoring pagination.
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: i64 = 20;

    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).max(0),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Filters for listing articles; all present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub tag: Option<String>,
    /// Author username.
    pub author: Option<String>,
    /// Username of a user who favorited the article.
    pub favorited: Option<String>,
    pub page: Pagination,
}

#[derive(Debug)]
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<TagName>,
}

impl CreateArticleCommand {
    /// # Errors
    /// * `BlankField` - Title, description or body is blank
    pub fn new(
        title: String,
        description: String,
        body: String,
        mut tags: Vec<TagName>,
    ) -> Result<Self, ArticleError> {
        for (field, value) in [("title", &title), ("description", &description), ("body", &body)]
        {
            if value.trim().is_empty() {
                return Err(ArticleError::BlankField(field));
            }
        }
        tags.sort();
        tags.dedup();

        Ok(Self {
            title,
            description,
            body,
            tags,
        })
    }
}

/// Partial article update; `None` leaves a field unchanged.
#[derive(Debug, Default, Clone)]
pub struct UpdateArticleCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl UpdateArticleCommand {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.body.is_none()
    }
}
