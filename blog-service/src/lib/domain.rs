pub mod article;
pub mod comment;
pub mod errors;
pub mod profile;
pub mod security;
pub mod tag;
pub mod user;

#[cfg(test)]
pub(crate) mod mocks;
