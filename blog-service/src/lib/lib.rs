pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::article;
pub use domain::comment;
pub use domain::profile;
pub use domain::security;
pub use domain::tag;
pub use domain::user;
pub use outbound::repositories;
