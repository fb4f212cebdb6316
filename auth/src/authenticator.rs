use crate::jwt::TokenError;
use crate::jwt::TokenService;
use crate::jwt::TokenSettings;
use crate::password::Credential;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(settings),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<Credential, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against the stored credential and issue a token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        credential: &Credential,
        subject: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(password, credential) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue(subject)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration and when refreshing the token of an
    /// already authenticated principal.
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_service.issue(subject)
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}
