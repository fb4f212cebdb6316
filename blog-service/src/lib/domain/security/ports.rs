use async_trait::async_trait;

use crate::domain::security::errors::SecurityError;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;

/// Builds a principal from a validated token subject.
#[async_trait]
pub trait PrincipalResolver: Send + Sync + 'static {
    /// # Errors
    /// * `PrincipalNotFound` - The account no longer exists
    /// * `Lookup` - Storage failed
    async fn resolve(&self, id: &UserId) -> Result<Principal, SecurityError>;
}
