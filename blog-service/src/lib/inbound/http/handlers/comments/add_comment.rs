use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::comment::models::AddCommentCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CommentResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    body: String,
}

pub async fn add_comment(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(slug): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> Result<ApiSuccess<CommentResponseData>, ApiError> {
    let command = AddCommentCommand::new(req.body)?;

    state
        .comment_service
        .add(&principal, &slug, command)
        .await
        .map_err(ApiError::from)
        .map(|ref view| ApiSuccess::new(StatusCode::CREATED, view.into()))
}
