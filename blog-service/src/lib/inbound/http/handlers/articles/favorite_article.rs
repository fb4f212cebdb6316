use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn favorite_article(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<ArticleResponseData>, ApiError> {
    state
        .article_service
        .favorite(&principal, &slug)
        .await
        .map_err(ApiError::from)
        .map(|ref view| ApiSuccess::new(StatusCode::OK, view.into()))
}
