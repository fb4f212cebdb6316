pub mod current_user;
pub mod login;
pub mod register;
pub mod update_user;

pub use current_user::current_user;
pub use login::login;
pub use register::register;
pub use update_user::update_user;
