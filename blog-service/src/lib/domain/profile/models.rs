use crate::domain::user::models::User;

/// Public view of a user, relative to whoever is looking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    /// Whether the viewer follows this user; always false for anonymous viewers.
    pub following: bool,
}

impl Profile {
    pub fn of(user: &User, following: bool) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following,
        }
    }
}
