use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path((slug, comment_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    // A malformed id cannot name an existing comment.
    let comment_id = CommentId::from_string(&comment_id).map_err(|_| CommentError::NotFound)?;

    state
        .comment_service
        .delete(&principal, &slug, &comment_id)
        .await
        .map_err(ApiError::from)
        .map(|()| StatusCode::NO_CONTENT)
}
