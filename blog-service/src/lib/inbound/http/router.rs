use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::articles;
use super::handlers::comments;
use super::handlers::profiles;
use super::handlers::tags;
use super::handlers::users;
use super::middleware::authenticate;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::security::authenticator::RequestAuthenticator;
use crate::domain::tag::ports::TagServicePort;
use crate::domain::user::ports::UserServicePort;

/// Services the handlers reach through their ports.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub profile_service: Arc<dyn ProfileServicePort>,
    pub article_service: Arc<dyn ArticleServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub tag_service: Arc<dyn TagServicePort>,
    pub request_authenticator: Arc<RequestAuthenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", post(users::register))
        .route("/users/login", post(users::login))
        .route("/user", get(users::current_user).put(users::update_user));

    let profile_routes = Router::new()
        .route("/profiles/:username", get(profiles::get_profile))
        .route(
            "/profiles/:username/follow",
            put(profiles::follow_user).delete(profiles::unfollow_user),
        );

    let article_routes = Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/feed", get(articles::feed_articles))
        .route(
            "/articles/:slug",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/:slug/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        .route(
            "/articles/:slug/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/articles/:slug/comments/:id",
            delete(comments::delete_comment),
        );

    let tag_routes = Router::new().route("/tags", get(tags::list_tags));

    // Credential material stays out of the span: no headers are recorded.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(user_routes)
        .merge(profile_routes)
        .merge(article_routes)
        .merge(tag_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
