//! Ownership predicates consulted by domain operations before mutating.
//!
//! Each returns `false` when no principal is present.

use crate::domain::article::models::Article;
use crate::domain::comment::models::Comment;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;

pub fn can_modify_article(principal: Option<&Principal>, article: &Article) -> bool {
    principal.is_some_and(|p| p.id == article.author_id)
}

pub fn can_delete_comment(principal: Option<&Principal>, comment: &Comment) -> bool {
    principal.is_some_and(|p| p.id == comment.author_id)
}

/// Covers unfollow as well: nobody may follow or unfollow themselves.
pub fn can_follow(principal: Option<&Principal>, target: &UserId) -> bool {
    principal.is_some_and(|p| p.id != *target)
}

/// Response shaping only.
pub fn is_favorited_by_principal(principal: Option<&Principal>, article: &Article) -> bool {
    principal.is_some_and(|p| article.favorited_by.contains(&p.id))
}
