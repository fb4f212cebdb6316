use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Immutable signing parameters, built once from configuration at startup.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    validity: Duration,
}

impl TokenSettings {
    /// # Arguments
    /// * `secret` - HMAC signing secret (at least 32 bytes for HS256)
    /// * `validity_seconds` - Lifetime of every issued token
    pub fn new(secret: impl Into<Vec<u8>>, validity_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            validity: Duration::seconds(validity_seconds),
        }
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("validity", &self.validity)
            .finish()
    }
}

/// Issues and validates HS256-signed identity tokens.
///
/// Stateless: a token is valid until its `exp` passes. There is no
/// revocation.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenService {
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            decoding_key: DecodingKey::from_secret(&settings.secret),
            validation,
            validity: settings.validity,
        }
    }

    /// Issue a token for `subject` expiring one validity window from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, issued_at, self.validity);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// True iff the token is well formed, correctly signed and not expired.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Extract the subject claim of a valid token.
    ///
    /// # Errors
    /// Same as [`TokenService::decode`].
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Verify the signature and expiry of a token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `InvalidSignature` - Token was not signed with this secret
    /// * `Malformed` - Token is not a decodable JWT or lacks required claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}
