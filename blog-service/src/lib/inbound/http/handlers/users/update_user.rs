use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::non_blank;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Absent, null and blank fields all mean "leave unchanged".
#[derive(Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        Ok(UpdateUserCommand {
            email: non_blank(self.email).map(EmailAddress::new).transpose()?,
            username: non_blank(self.username).map(Username::new).transpose()?,
            password: non_blank(self.password).map(Password::new).transpose()?,
            bio: non_blank(self.bio),
            image: non_blank(self.image),
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&principal, command)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let request = UpdateUserRequest {
            email: Some(" ".to_string()),
            bio: Some(String::new()),
            ..Default::default()
        };

        let command = request.try_into_command().unwrap();
        assert!(command.is_empty());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            request.try_into_command(),
            Err(UserError::InvalidEmail(_))
        ));
    }
}
