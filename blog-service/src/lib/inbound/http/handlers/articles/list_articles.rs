use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ArticlesResponseData;
use crate::domain::article::models::ArticleQuery;
use crate::domain::article::models::Pagination;
use crate::inbound::http::handlers::non_blank;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::MaybeAuthenticatedUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<ListArticlesParams> for ArticleQuery {
    fn from(params: ListArticlesParams) -> Self {
        Self {
            tag: non_blank(params.tag),
            author: non_blank(params.author),
            favorited: non_blank(params.favorited),
            page: Pagination::new(params.limit, params.offset),
        }
    }
}

pub async fn list_articles(
    State(state): State<AppState>,
    MaybeAuthenticatedUser(viewer): MaybeAuthenticatedUser,
    Query(params): Query<ListArticlesParams>,
) -> Result<ApiSuccess<ArticlesResponseData>, ApiError> {
    state
        .article_service
        .list(params.into(), viewer)
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default_to_first_page() {
        let query = ArticleQuery::from(ListArticlesParams::default());
        assert_eq!(query.page, Pagination::new(Some(20), Some(0)));
        assert_eq!(query.tag, None);
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let query = ArticleQuery::from(ListArticlesParams {
            tag: Some(String::new()),
            author: Some("jake".to_string()),
            ..Default::default()
        });
        assert_eq!(query.tag, None);
        assert_eq!(query.author.as_deref(), Some("jake"));
    }
}
