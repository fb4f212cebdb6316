pub mod follow_user;
pub mod get_profile;
pub mod unfollow_user;

pub use follow_user::follow_user;
pub use get_profile::get_profile;
pub use unfollow_user::unfollow_user;

use crate::domain::errors::ErrorKind;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;

/// A path segment that cannot be a username names no profile.
fn parse_username(raw: String) -> Result<Username, ApiError> {
    Username::new(raw).map_err(|_| ApiError::new(ErrorKind::NotFound, "Profile not found"))
}
