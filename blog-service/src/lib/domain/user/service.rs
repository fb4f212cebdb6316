use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::security::models::Principal;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSession;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn session(&self, user: User) -> Result<UserSession, UserError> {
        let token = self.authenticator.issue_token(&user.id.to_string())?;
        Ok(UserSession { user, token })
    }

    async fn load(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserSession, UserError> {
        let credential = self
            .authenticator
            .hash_password(command.password.expose())?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            credential,
            bio: None,
            image: None,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        self.session(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<UserSession, UserError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let token = self
            .authenticator
            .authenticate(&command.password, &user.credential, &user.id.to_string())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::TokenError(err) => UserError::Token(err),
            })?;

        Ok(UserSession { user, token })
    }

    async fn current_user(&self, principal: &Principal) -> Result<UserSession, UserError> {
        let user = self.load(&principal.id).await?;
        self.session(user)
    }

    async fn update_user(
        &self,
        principal: &Principal,
        command: UpdateUserCommand,
    ) -> Result<UserSession, UserError> {
        if command.is_empty() {
            return Err(UserError::EmptyUpdate);
        }

        let mut user = self.load(&principal.id).await?;

        if let Some(email) = command.email {
            user.email = email;
        }
        if let Some(username) = command.username {
            user.username = username;
        }
        if let Some(password) = command.password {
            user.credential = self.authenticator.hash_password(password.expose())?;
        }
        if let Some(bio) = command.bio {
            user.bio = Some(bio);
        }
        if let Some(image) = command.image {
            user.image = Some(image);
        }

        let updated_user = self.repository.update(user).await?;
        self.session(updated_user)
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenSettings;

    use super::*;
    use crate::domain::mocks::MockTestUserRepository;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::Username;

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(&TokenSettings::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes".to_vec(),
            3600,
        )))
    }

    fn stored_user(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("author".to_string()).unwrap(),
            email: EmailAddress::new("author@test.com".to_string()).unwrap(),
            credential: authenticator.hash_password(password).unwrap(),
            bio: None,
            image: None,
            created_at: Utc::now(),
        }
    }

    fn principal_of(user: &User) -> Principal {
        Principal::from(user)
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_issues_token() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "author"
                    && user.email.as_str() == "author@test.com"
                    && user.credential.as_phc_str().starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let authenticator = authenticator();
        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let command = RegisterUserCommand::new(
            Username::new("author".to_string()).unwrap(),
            EmailAddress::new("author@test.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let session = service.register(command).await.unwrap();
        let subject = authenticator
            .token_service()
            .subject(&session.token)
            .unwrap();
        assert_eq!(subject, session.user.id.to_string());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), authenticator());
        let command = RegisterUserCommand::new(
            Username::new("author".to_string()).unwrap(),
            EmailAddress::new("author@test.com".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let user_id = user.id;

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "author@test.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));
        let session = service
            .login(LoginCommand {
                email: "author@test.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, user_id);
        assert!(authenticator.token_service().validate(&session.token));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);
        let result = service
            .login(LoginCommand {
                email: "author@test.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());
        let result = service
            .login(LoginCommand {
                email: "nobody@test.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_update_user_rejects_empty_command() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_id().times(0);
        repository.expect_update().times(0);

        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service
            .update_user(&principal_of(&user), UpdateUserCommand::default())
            .await;

        assert!(matches!(result, Err(UserError::EmptyUpdate)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "At least one field must be provided for update"
        );
    }

    #[tokio::test]
    async fn test_update_user_changes_only_present_fields() {
        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let principal = principal_of(&user);

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_update()
            .withf(|user| {
                user.bio.as_deref() == Some("I work at statefarm")
                    && user.username.as_str() == "author"
                    && user.image.is_none()
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), authenticator);
        let command = UpdateUserCommand {
            bio: Some("I work at statefarm".to_string()),
            ..Default::default()
        };

        let session = service.update_user(&principal, command).await.unwrap();
        assert_eq!(session.user.bio.as_deref(), Some("I work at statefarm"));
    }

    #[tokio::test]
    async fn test_current_user_missing_account() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let authenticator = authenticator();
        let user = stored_user(&authenticator, "password123");
        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service.current_user(&principal_of(&user)).await;
        assert!(matches!(result, Err(UserError::NotFound)));
    }
}
