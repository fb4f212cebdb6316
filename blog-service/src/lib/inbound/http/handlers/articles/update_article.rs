use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::article::models::UpdateArticleCommand;
use crate::inbound::http::handlers::non_blank;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Absent, null and blank fields all mean "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl From<UpdateArticleRequest> for UpdateArticleCommand {
    fn from(req: UpdateArticleRequest) -> Self {
        Self {
            title: non_blank(req.title),
            description: non_blank(req.description),
            body: non_blank(req.body),
        }
    }
}

pub async fn update_article(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(slug): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> Result<ApiSuccess<ArticleResponseData>, ApiError> {
    state
        .article_service
        .update(&principal, &slug, req.into())
        .await
        .map_err(ApiError::from)
        .map(|ref view| ApiSuccess::new(StatusCode::OK, view.into()))
}
