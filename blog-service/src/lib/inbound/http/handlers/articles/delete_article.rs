use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_article(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .article_service
        .delete(&principal, &slug)
        .await
        .map_err(ApiError::from)
        .map(|()| StatusCode::NO_CONTENT)
}
