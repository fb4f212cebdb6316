pub mod articles;
pub mod comments;
pub mod profiles;
pub mod tags;
pub mod users;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::ArticleView;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentView;
use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::tag::errors::TagError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserSession;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// The single place where error kinds become status codes.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Rejection for operations that need a principal but got none.
    pub fn unauthenticated() -> Self {
        Self::new(ErrorKind::Unauthenticated, "Authentication required")
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_domain<E: DomainError>(err: &E) -> Self {
        match err.kind() {
            ErrorKind::Internal => {
                tracing::error!(error = %err, "Request failed with internal error");
                Self::new(ErrorKind::Internal, INTERNAL_ERROR_MESSAGE)
            }
            kind => Self::new(kind, err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind);
        (status, Json(ApiResponseBody::new_error(status, self.message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        Self::from_domain(&err)
    }
}

impl From<TagError> for ApiError {
    fn from(err: TagError) -> Self {
        Self::from_domain(&err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Optional text input where blank means "not provided".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<&UserSession> for UserResponseData {
    fn from(session: &UserSession) -> Self {
        Self {
            email: session.user.email.as_str().to_string(),
            token: session.token.clone(),
            username: session.user.username.as_str().to_string(),
            bio: session.user.bio.clone(),
            image: session.user.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl From<&Profile> for ProfileResponseData {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            bio: profile.bio.clone(),
            image: profile.image.clone(),
            following: profile.following,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponseData {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: usize,
    pub author: ProfileResponseData,
}

impl From<&ArticleView> for ArticleResponseData {
    fn from(view: &ArticleView) -> Self {
        let article = &view.article;
        Self {
            slug: article.slug.as_str().to_string(),
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tag_list: article.tags.iter().map(|t| t.as_str().to_string()).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: view.favorited,
            favorites_count: view.favorites_count,
            author: (&view.author).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseData {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: ProfileResponseData,
}

impl From<&CommentView> for CommentResponseData {
    fn from(view: &CommentView) -> Self {
        Self {
            id: view.comment.id.to_string(),
            created_at: view.comment.created_at,
            updated_at: view.comment.updated_at,
            body: view.comment.body.clone(),
            author: (&view.author).into(),
        }
    }
}
