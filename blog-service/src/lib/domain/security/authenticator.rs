use std::sync::Arc;

use auth::TokenService;

use crate::domain::security::errors::SecurityError;
use crate::domain::security::models::Principal;
use crate::domain::security::models::PublicRoute;
use crate::domain::security::ports::PrincipalResolver;
use crate::domain::user::models::UserId;

const TOKEN_SCHEMES: [&str; 2] = ["Token ", "Bearer "];

/// Turns the credential header of a request into an optional principal.
///
/// Never fails a request: every rejection ends as "no principal", leaving
/// operations that require identity to refuse on their own.
pub struct RequestAuthenticator {
    token_service: Arc<TokenService>,
    resolver: Arc<dyn PrincipalResolver>,
    public_routes: Vec<PublicRoute>,
}

impl RequestAuthenticator {
    pub fn new(
        token_service: Arc<TokenService>,
        resolver: Arc<dyn PrincipalResolver>,
        public_routes: Vec<PublicRoute>,
    ) -> Self {
        Self {
            token_service,
            resolver,
            public_routes,
        }
    }

    /// # Arguments
    /// * `method` - Request method, e.g. `GET`
    /// * `path` - Request path without query string
    /// * `authorization` - Raw `Authorization` header value, if any
    pub async fn authenticate(
        &self,
        method: &str,
        path: &str,
        authorization: Option<&str>,
    ) -> Option<Principal> {
        if self.is_public(method, path) {
            return None;
        }

        let token = extract_token(authorization?)?;

        if !self.token_service.validate(token) {
            tracing::debug!(method, path, "Rejected invalid or expired token");
            return None;
        }

        match self.principal_for(token).await {
            Ok(principal) => Some(principal),
            Err(e) => {
                tracing::warn!(error = %e, method, path, "Could not resolve principal");
                None
            }
        }
    }

    pub fn is_public(&self, method: &str, path: &str) -> bool {
        self.public_routes
            .iter()
            .any(|route| route.matches(method, path))
    }

    async fn principal_for(&self, token: &str) -> Result<Principal, SecurityError> {
        let subject = self.token_service.subject(token)?;
        let user_id = UserId::from_string(&subject)?;
        self.resolver.resolve(&user_id).await
    }
}

fn extract_token(header: &str) -> Option<&str> {
    TOKEN_SCHEMES
        .iter()
        .find_map(|scheme| header.strip_prefix(scheme))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
