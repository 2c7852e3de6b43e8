//! Top-level error wrapper types.

use crate::{ConfigError, StorageError, UrlError};

/// Every error condition a polymedia operation can surface.
///
/// # Examples
///
/// ```
/// use polymedia_error::{PolymediaError, PolymediaErrorKind, StorageError, StorageErrorKind};
///
/// let err: PolymediaError =
///     StorageError::new(StorageErrorKind::NotFound("/tmp/missing.png".to_string())).into();
/// assert!(matches!(err.kind(), PolymediaErrorKind::Storage(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PolymediaErrorKind {
    /// Filesystem, asset bundle or other byte storage failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Malformed network locator
    #[from(UrlError)]
    Url(UrlError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Polymedia error with kind discrimination.
///
/// # Examples
///
/// ```
/// use polymedia_error::{ConfigError, PolymediaResult};
///
/// fn might_fail() -> PolymediaResult<()> {
///     Err(ConfigError::new("Missing [assets] section"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Polymedia Error: {}", _0)]
pub struct PolymediaError(Box<PolymediaErrorKind>);

impl PolymediaError {
    /// Create a new error from a kind.
    pub fn new(kind: PolymediaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PolymediaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PolymediaErrorKind
impl<T> From<T> for PolymediaError
where
    T: Into<PolymediaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for polymedia operations.
pub type PolymediaResult<T> = std::result::Result<T, PolymediaError>;
