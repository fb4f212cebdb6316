//! Port mocks and fixtures shared by the domain service tests.

use async_trait::async_trait;
use auth::Credential;
use chrono::Utc;
use mockall::mock;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleQuery;
use crate::domain::article::models::Pagination;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::ports::FollowRepository;
use crate::domain::security::models::Principal;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::ports::TagRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn create(&self, user: User) -> Result<User, UserError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
        async fn update(&self, user: User) -> Result<User, UserError>;
    }
}

mock! {
    pub TestFollowRepository {}

    #[async_trait]
    impl FollowRepository for TestFollowRepository {
        async fn follow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError>;
        async fn unfollow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError>;
        async fn is_following(&self, follower: &UserId, followed: &UserId) -> Result<bool, ProfileError>;
        async fn followed_among(&self, follower: &UserId, candidates: &[UserId]) -> Result<Vec<UserId>, ProfileError>;
    }
}

mock! {
    pub TestTagRepository {}

    #[async_trait]
    impl TagRepository for TestTagRepository {
        async fn list_all(&self) -> Result<Vec<Tag>, TagError>;
    }
}

mock! {
    pub TestArticleRepository {}

    #[async_trait]
    impl ArticleRepository for TestArticleRepository {
        async fn create(&self, article: Article) -> Result<Article, ArticleError>;
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleError>;
        async fn list(&self, query: &ArticleQuery) -> Result<(Vec<Article>, i64), ArticleError>;
        async fn feed(&self, follower: &UserId, page: &Pagination) -> Result<(Vec<Article>, i64), ArticleError>;
        async fn update(&self, article: Article) -> Result<Article, ArticleError>;
        async fn delete(&self, id: &ArticleId) -> Result<(), ArticleError>;
        async fn add_favorite(&self, article: &ArticleId, user: &UserId) -> Result<bool, ArticleError>;
        async fn remove_favorite(&self, article: &ArticleId, user: &UserId) -> Result<bool, ArticleError>;
    }
}

mock! {
    pub TestCommentRepository {}

    #[async_trait]
    impl CommentRepository for TestCommentRepository {
        async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;
        async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
        async fn list_by_article(&self, article: &ArticleId) -> Result<Vec<Comment>, CommentError>;
        async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
    }
}

/// A stored user whose credential matches no password.
pub fn user_named(username: &str) -> User {
    User {
        id: UserId::new(),
        username: Username::new(username.to_string()).unwrap(),
        email: EmailAddress::new(format!("{}@test.com", username)).unwrap(),
        credential: Credential::from_phc("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
        bio: None,
        image: None,
        created_at: Utc::now(),
    }
}

pub fn principal_of(user: &User) -> Principal {
    Principal::from(user)
}
