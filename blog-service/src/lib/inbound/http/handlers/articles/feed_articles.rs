use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ArticlesResponseData;
use crate::domain::article::models::Pagination;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn feed_articles(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(params): Query<FeedParams>,
) -> Result<ApiSuccess<ArticlesResponseData>, ApiError> {
    state
        .article_service
        .feed(&principal, Pagination::new(params.limit, params.offset))
        .await
        .map_err(ApiError::from)
        .map(|ref page| ApiSuccess::new(StatusCode::OK, page.into()))
}
