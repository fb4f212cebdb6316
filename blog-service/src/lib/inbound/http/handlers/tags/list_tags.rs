use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagsResponseData {
    pub tags: Vec<String>,
}

pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<ApiSuccess<TagsResponseData>, ApiError> {
    state
        .tag_service
        .list_tags()
        .await
        .map_err(ApiError::from)
        .map(|tags| {
            let tags = tags.iter().map(|t| t.as_str().to_string()).collect();
            ApiSuccess::new(StatusCode::OK, TagsResponseData { tags })
        })
}
