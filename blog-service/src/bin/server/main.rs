use std::sync::Arc;

use auth::Authenticator;
use auth::TokenService;
use blog_service::article::service::ArticleService;
use blog_service::comment::service::CommentService;
use blog_service::config::Config;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::profile::service::ProfileService;
use blog_service::repositories::PostgresArticleRepository;
use blog_service::repositories::PostgresCommentRepository;
use blog_service::repositories::PostgresFollowRepository;
use blog_service::repositories::PostgresTagRepository;
use blog_service::repositories::PostgresUserRepository;
use blog_service::security::authenticator::RequestAuthenticator;
use blog_service::security::resolver::UserPrincipalResolver;
use blog_service::tag::service::TagService;
use blog_service::user::service::UserService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_validity_seconds = config.jwt.validity_seconds,
        public_routes = config.auth.public_routes.len(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_settings = config.jwt.token_settings();
    let authenticator = Arc::new(Authenticator::new(&token_settings));
    let token_service = Arc::new(TokenService::new(&token_settings));

    let users = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let follows = Arc::new(PostgresFollowRepository::new(pg_pool.clone()));
    let tags = Arc::new(PostgresTagRepository::new(pg_pool.clone()));
    let articles = Arc::new(PostgresArticleRepository::new(pg_pool.clone()));
    let comments = Arc::new(PostgresCommentRepository::new(pg_pool));

    let request_authenticator = Arc::new(RequestAuthenticator::new(
        token_service,
        Arc::new(UserPrincipalResolver::new(Arc::clone(&users))),
        config.auth.public_routes.clone(),
    ));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::clone(&users), authenticator)),
        profile_service: Arc::new(ProfileService::new(
            Arc::clone(&users),
            Arc::clone(&follows),
        )),
        article_service: Arc::new(ArticleService::new(
            Arc::clone(&articles),
            Arc::clone(&users),
            Arc::clone(&follows),
        )),
        comment_service: Arc::new(CommentService::new(
            comments,
            articles,
            Arc::clone(&users),
            follows,
        )),
        tag_service: Arc::new(TagService::new(tags)),
        request_authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;
    tracing::info!("Server exited");

    Ok(())
}
