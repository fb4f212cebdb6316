use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileResponseData;
use crate::inbound::http::middleware::MaybeAuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    MaybeAuthenticatedUser(viewer): MaybeAuthenticatedUser,
    Path(username): Path<String>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    let username = parse_username(username)?;

    state
        .profile_service
        .get_profile(&username, viewer)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
