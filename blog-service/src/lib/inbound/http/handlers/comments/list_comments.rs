use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentResponseData;
use crate::inbound::http::middleware::MaybeAuthenticatedUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentsResponseData {
    pub comments: Vec<CommentResponseData>,
}

pub async fn list_comments(
    State(state): State<AppState>,
    MaybeAuthenticatedUser(viewer): MaybeAuthenticatedUser,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<CommentsResponseData>, ApiError> {
    state
        .comment_service
        .list(&slug, viewer)
        .await
        .map_err(ApiError::from)
        .map(|views| {
            let comments = views.iter().map(CommentResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, CommentsResponseData { comments })
        })
}
