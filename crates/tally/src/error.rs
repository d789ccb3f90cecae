//! Core error types.

use thiserror::Error;

/// Errors surfaced by counter backings.
///
/// The built-in store never fails; the only error path is an attached
/// external client raising one, which is handed to the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure raised by an attached client backend.
    #[error("client error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a backend-specific failure raised by a client.
    pub fn client<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Client(Box::new(err))
    }
}

/// Convenience alias for registry and client operations.
pub type Result<T> = std::result::Result<T, Error>;
