use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::security::errors::SecurityError;
use crate::domain::security::models::Principal;
use crate::domain::security::ports::PrincipalResolver;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Resolves principals by loading the user record behind the token subject.
pub struct UserPrincipalResolver<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserPrincipalResolver<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> PrincipalResolver for UserPrincipalResolver<UR>
where
    UR: UserRepository,
{
    async fn resolve(&self, id: &UserId) -> Result<Principal, SecurityError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|ref user| Principal::from(user))
            .ok_or(SecurityError::PrincipalNotFound)
    }
}
