use serde::Deserialize;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Authenticated identity bound to a single request.
///
/// Built fresh from the token subject on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: UserId,
    pub email: String,
    pub username: String,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            username: user.username.as_str().to_string(),
        }
    }
}

/// A method and path prefix served without looking at credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicRoute {
    pub method: String,
    pub path_prefix: String,
}

impl PublicRoute {
    pub fn new(method: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path_prefix: path_prefix.into(),
        }
    }

    /// The prefix matches whole path segments only: `/tags` covers `/tags`
    /// and `/tags/rust` but not `/tagsanything`.
    pub fn matches(&self, method: &str, path: &str) -> bool {
        if !self.method.eq_ignore_ascii_case(method) {
            return false;
        }

        match path.strip_prefix(self.path_prefix.trim_end_matches('/')) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_route_matches_method_and_prefix() {
        let route = PublicRoute::new("GET", "/tags");

        assert!(route.matches("GET", "/tags"));
        assert!(route.matches("get", "/tags"));
        assert!(!route.matches("POST", "/tags"));
        assert!(!route.matches("GET", "/articles"));
    }

    #[test]
    fn test_public_route_respects_segment_boundary() {
        let route = PublicRoute::new("GET", "/tags");

        assert!(route.matches("GET", "/tags/rust"));
        assert!(!route.matches("GET", "/tagsanything"));
        assert!(!route.matches("GET", "/tag"));

        let nested = PublicRoute::new("GET", "/articles/");
        assert!(nested.matches("GET", "/articles"));
        assert!(nested.matches("GET", "/articles/how-to-train-your-dragon"));
        assert!(!nested.matches("GET", "/articlesfeed"));
    }
}
