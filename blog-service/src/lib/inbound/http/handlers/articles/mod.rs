pub mod create_article;
pub mod delete_article;
pub mod favorite_article;
pub mod feed_articles;
pub mod get_article;
pub mod list_articles;
pub mod unfavorite_article;
pub mod update_article;

pub use create_article::create_article;
pub use delete_article::delete_article;
pub use favorite_article::favorite_article;
pub use feed_articles::feed_articles;
pub use get_article::get_article;
pub use list_articles::list_articles;
pub use unfavorite_article::unfavorite_article;
pub use update_article::update_article;

use serde::Serialize;

use crate::domain::article::models::ArticlePage;
use crate::inbound::http::handlers::ArticleResponseData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponseData {
    pub articles: Vec<ArticleResponseData>,
    pub articles_count: i64,
}

impl From<&ArticlePage> for ArticlesResponseData {
    fn from(page: &ArticlePage) -> Self {
        Self {
            articles: page.articles.iter().map(ArticleResponseData::from).collect(),
            articles_count: page.total,
        }
    }
}
