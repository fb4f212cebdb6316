pub mod add_comment;
pub mod delete_comment;
pub mod list_comments;

pub use add_comment::add_comment;
pub use delete_comment::delete_comment;
pub use list_comments::list_comments;
