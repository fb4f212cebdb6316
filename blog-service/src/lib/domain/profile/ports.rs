use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for profile viewing and the follow relation.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `NotFound` - No user with this username
    async fn get_profile(
        &self,
        username: &Username,
        viewer: Option<Principal>,
    ) -> Result<Profile, ProfileError>;

    /// Follow a user. Following someone already followed succeeds unchanged.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `CannotFollowSelf` - Target is the principal
    async fn follow(&self, principal: &Principal, username: &Username)
        -> Result<Profile, ProfileError>;

    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `CannotUnfollowSelf` - Target is the principal
    async fn unfollow(
        &self,
        principal: &Principal,
        username: &Username,
    ) -> Result<Profile, ProfileError>;
}

/// Persistence of the follow relation, stored in the follower's direction.
#[async_trait]
pub trait FollowRepository: Send + Sync + 'static {
    /// Insert the pair unless already present.
    async fn follow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError>;

    /// Remove the pair if present.
    async fn unfollow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError>;

    async fn is_following(&self, follower: &UserId, followed: &UserId)
        -> Result<bool, ProfileError>;

    /// The subset of `candidates` that `follower` follows.
    async fn followed_among(
        &self,
        follower: &UserId,
        candidates: &[UserId],
    ) -> Result<Vec<UserId>, ProfileError>;
}
