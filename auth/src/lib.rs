//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id) behind an opaque [`Credential`]
//! - Signed, time-limited identity tokens (HS256 JWT)
//! - Authentication coordination (verify credential, then issue token)
//!
//! The signing secret is never global: it is carried by an explicitly
//! constructed [`TokenSettings`] value.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let credential = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &credential));
//! assert!(!hasher.verify("other_password", &credential));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenService, TokenSettings};
//!
//! let settings = TokenSettings::new(b"secret_key_at_least_32_bytes_long!".to_vec(), 3600);
//! let tokens = TokenService::new(&settings);
//! let token = tokens.issue("user123").unwrap();
//! assert!(tokens.validate(&token));
//! assert_eq!(tokens.subject(&token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//!
//! let settings = TokenSettings::new(b"secret_key_at_least_32_bytes_long!".to_vec(), 3600);
//! let auth = Authenticator::new(&settings);
//!
//! // Register: hash password
//! let credential = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let token = auth.authenticate("password123", &credential, "user123").unwrap();
//!
//! // Validate token
//! assert!(auth.token_service().validate(&token));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use jwt::TokenSettings;
pub use password::Credential;
pub use password::PasswordError;
pub use password::PasswordHasher;
