use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::ports::FollowRepository;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::security::guards::can_follow;
use crate::domain::security::models::Principal;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct ProfileService<UR, FR>
where
    UR: UserRepository,
    FR: FollowRepository,
{
    users: Arc<UR>,
    follows: Arc<FR>,
}

impl<UR, FR> ProfileService<UR, FR>
where
    UR: UserRepository,
    FR: FollowRepository,
{
    pub fn new(users: Arc<UR>, follows: Arc<FR>) -> Self {
        Self { users, follows }
    }

    async fn target(&self, username: &Username) -> Result<User, ProfileError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}

/// Viewer-relative profiles for a set of authors, keyed by user id.
///
/// Authors missing from storage are absent from the map.
pub async fn author_profiles<UR, FR>(
    users: &UR,
    follows: &FR,
    viewer: Option<&Principal>,
    authors: &[UserId],
) -> Result<HashMap<UserId, Profile>, ProfileError>
where
    UR: UserRepository + ?Sized,
    FR: FollowRepository + ?Sized,
{
    let mut ids = authors.to_vec();
    ids.sort_by_key(|id| id.0);
    ids.dedup();

    let found = users.find_by_ids(&ids).await?;
    let followed: HashSet<UserId> = match viewer {
        Some(viewer) => follows
            .followed_among(&viewer.id, &ids)
            .await?
            .into_iter()
            .collect(),
        None => HashSet::new(),
    };

    Ok(found
        .iter()
        .map(|user| (user.id, Profile::of(user, followed.contains(&user.id))))
        .collect())
}

#[async_trait]
impl<UR, FR> ProfileServicePort for ProfileService<UR, FR>
where
    UR: UserRepository,
    FR: FollowRepository,
{
    async fn get_profile(
        &self,
        username: &Username,
        viewer: Option<Principal>,
    ) -> Result<Profile, ProfileError> {
        let user = self.target(username).await?;

        let following = match viewer {
            Some(viewer) => self.follows.is_following(&viewer.id, &user.id).await?,
            None => false,
        };

        Ok(Profile::of(&user, following))
    }

    async fn follow(
        &self,
        principal: &Principal,
        username: &Username,
    ) -> Result<Profile, ProfileError> {
        let user = self.target(username).await?;

        if !can_follow(Some(principal), &user.id) {
            return Err(ProfileError::CannotFollowSelf);
        }

        self.follows.follow(&principal.id, &user.id).await?;
        tracing::debug!(follower = %principal.id, followed = %user.id, "Followed user");

        Ok(Profile::of(&user, true))
    }

    async fn unfollow(
        &self,
        principal: &Principal,
        username: &Username,
    ) -> Result<Profile, ProfileError> {
        let user = self.target(username).await?;

        if !can_follow(Some(principal), &user.id) {
            return Err(ProfileError::CannotUnfollowSelf);
        }

        self.follows.unfollow(&principal.id, &user.id).await?;
        tracing::debug!(follower = %principal.id, followed = %user.id, "Unfollowed user");

        Ok(Profile::of(&user, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks::user_named;
    use crate::domain::mocks::MockTestFollowRepository;
    use crate::domain::mocks::MockTestUserRepository;

    fn username(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_get_profile_anonymous_is_not_following() {
        let celeb = user_named("celeb");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(celeb.clone())));
        let mut follows = MockTestFollowRepository::new();
        follows.expect_is_following().times(0);

        let service = ProfileService::new(Arc::new(users), Arc::new(follows));
        let profile = service.get_profile(&username("celeb"), None).await.unwrap();

        assert_eq!(profile.username, "celeb");
        assert!(!profile.following);
    }

    #[tokio::test]
    async fn test_get_profile_relative_to_viewer() {
        let celeb = user_named("celeb");
        let fan = user_named("fan");
        let celeb_id = celeb.id;
        let fan_id = fan.id;

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(celeb.clone())));
        let mut follows = MockTestFollowRepository::new();
        follows
            .expect_is_following()
            .withf(move |follower, followed| *follower == fan_id && *followed == celeb_id)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = ProfileService::new(Arc::new(users), Arc::new(follows));
        let profile = service
            .get_profile(&username("celeb"), Some(Principal::from(&fan)))
            .await
            .unwrap();

        assert!(profile.following);
    }

    #[tokio::test]
    async fn test_get_profile_unknown_user() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(
            Arc::new(users),
            Arc::new(MockTestFollowRepository::new()),
        );
        let result = service.get_profile(&username("ghost"), None).await;

        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_follow_other_user() {
        let celeb = user_named("celeb");
        let fan = user_named("fan");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(celeb.clone())));
        let mut follows = MockTestFollowRepository::new();
        follows.expect_follow().times(1).returning(|_, _| Ok(()));

        let service = ProfileService::new(Arc::new(users), Arc::new(follows));
        let profile = service
            .follow(&Principal::from(&fan), &username("celeb"))
            .await
            .unwrap();

        assert!(profile.following);
    }

    #[tokio::test]
    async fn test_follow_self_is_rejected() {
        let me = user_named("narcissus");
        let principal = Principal::from(&me);

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(me.clone())));
        let mut follows = MockTestFollowRepository::new();
        follows.expect_follow().times(0);
        follows.expect_unfollow().times(0);

        let service = ProfileService::new(Arc::new(users), Arc::new(follows));

        let result = service.follow(&principal, &username("narcissus")).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Users cannot follow themselves"
        );

        let result = service.unfollow(&principal, &username("narcissus")).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Users cannot unfollow themselves"
        );
    }

    #[tokio::test]
    async fn test_unfollow_other_user() {
        let celeb = user_named("celeb");
        let fan = user_named("fan");

        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(celeb.clone())));
        let mut follows = MockTestFollowRepository::new();
        follows.expect_unfollow().times(1).returning(|_, _| Ok(()));

        let service = ProfileService::new(Arc::new(users), Arc::new(follows));
        let profile = service
            .unfollow(&Principal::from(&fan), &username("celeb"))
            .await
            .unwrap();

        assert!(!profile.following);
    }
}
