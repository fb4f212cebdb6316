use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleResponseData;
use crate::inbound::http::middleware::MaybeAuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_article(
    State(state): State<AppState>,
    MaybeAuthenticatedUser(viewer): MaybeAuthenticatedUser,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<ArticleResponseData>, ApiError> {
    state
        .article_service
        .get(&slug, viewer)
        .await
        .map_err(ApiError::from)
        .map(|ref view| ApiSuccess::new(StatusCode::OK, view.into()))
}
