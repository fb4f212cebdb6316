//! Request-scoped identity and ownership checks.

pub mod authenticator;
pub mod errors;
pub mod guards;
pub mod models;
pub mod ports;
pub mod resolver;
