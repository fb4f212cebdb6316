use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagName;
use crate::domain::tag::ports::TagRepository;
use crate::domain::tag::ports::TagServicePort;

pub struct TagService<TR>
where
    TR: TagRepository,
{
    repository: Arc<TR>,
}

impl<TR> TagService<TR>
where
    TR: TagRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TagServicePort for TagService<TR>
where
    TR: TagRepository,
{
    async fn list_tags(&self) -> Result<Vec<TagName>, TagError> {
        let mut names: Vec<TagName> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks::MockTestTagRepository;
    use crate::domain::tag::models::Tag;
    use crate::domain::tag::models::TagId;

    fn tag(name: &str) -> Tag {
        Tag {
            id: TagId::new(),
            name: TagName::new(name).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_tags_sorted() {
        let mut repository = MockTestTagRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![tag("rust"), tag("dragons"), tag("axum")]));

        let service = TagService::new(Arc::new(repository));
        let names: Vec<String> = service
            .list_tags()
            .await
            .unwrap()
            .iter()
            .map(|name| name.to_string())
            .collect();

        assert_eq!(names, vec!["axum", "dragons", "rust"]);
    }
}
