//! Network locator error types.

/// Kinds of locator parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UrlErrorKind {
    /// No locator was supplied
    #[display("URL is empty")]
    Empty,
    /// The locator could not be parsed
    #[display("Malformed URL '{}': {}", url, reason)]
    Malformed {
        /// The rejected input
        url: String,
        /// Parser diagnostic
        reason: String,
    },
}

/// Locator parse error with location tracking.
///
/// # Examples
///
/// ```
/// use polymedia_error::{UrlError, UrlErrorKind};
///
/// let err = UrlError::new(UrlErrorKind::Malformed {
///     url: "::".to_string(),
///     reason: "relative URL without a base".to_string(),
/// });
/// assert!(format!("{}", err).contains("Malformed URL"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("URL Error: {} at line {} in {}", kind, line, file)]
pub struct UrlError {
    /// The kind of error that occurred
    pub kind: UrlErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UrlError {
    /// Create a new locator error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UrlErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &UrlErrorKind {
        &self.kind
    }
}
