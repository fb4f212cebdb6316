use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_article(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Json(body): Json<CreateArticleRequest>,
) -> Result<ApiSuccess<ArticleResponseData>, ApiError> {
    state
        .article_service
        .create(&principal, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref view| ApiSuccess::new(StatusCode::CREATED, view.into()))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    title: String,
    description: String,
    body: String,
    #[serde(default)]
    tag_list: Vec<String>,
}

impl CreateArticleRequest {
    fn try_into_command(self) -> Result<CreateArticleCommand, ArticleError> {
        let tags = self
            .tag_list
            .iter()
            .map(|name| TagName::new(name).map_err(TagError::from))
            .collect::<Result<Vec<_>, _>>()?;

        CreateArticleCommand::new(self.title, self.description, self.body, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::errors::ErrorKind;

    #[test]
    fn test_request_parses_camel_case_tags() {
        let request: CreateArticleRequest = serde_json::from_str(
            r#"{"title":"t","description":"d","body":"b","tagList":["dragons","training"]}"#,
        )
        .unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.tags.len(), 2);
    }

    #[test]
    fn test_blank_tag_is_validation_error() {
        let request = CreateArticleRequest {
            title: "t".to_string(),
            description: "d".to_string(),
            body: "b".to_string(),
            tag_list: vec!["  ".to_string()],
        };

        let err = request.try_into_command().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
