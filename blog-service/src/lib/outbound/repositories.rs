pub mod article;
pub mod comment;
pub mod follow;
pub mod tag;
pub mod user;

pub use article::PostgresArticleRepository;
pub use comment::PostgresCommentRepository;
pub use follow::PostgresFollowRepository;
pub use tag::PostgresTagRepository;
pub use user::PostgresUserRepository;
