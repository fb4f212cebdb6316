/// Category of a domain failure, independent of any transport.
///
/// Every aggregate error reports one of these through [`DomainError::kind`];
/// the inbound layer maps kinds to protocol status codes in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Identity is required but missing or invalid.
    Unauthenticated,
    /// Identity is known but does not own the resource.
    Forbidden,
    NotFound,
    Conflict,
    Validation,
    /// Storage, hashing or token-signing fault.
    Internal,
}

pub trait DomainError: std::error::Error {
    fn kind(&self) -> ErrorKind;
}
