//! Error types for the polymedia library.
//!
//! This crate provides the error types shared by every polymedia crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use polymedia_error::{PolymediaResult, UrlError, UrlErrorKind};
//!
//! fn locate(raw: &str) -> PolymediaResult<String> {
//!     if raw.is_empty() {
//!         Err(UrlError::new(UrlErrorKind::Empty))?
//!     }
//!     Ok(raw.to_string())
//! }
//!
//! assert!(locate("").is_err());
//! assert!(locate("https://example.com/a.mp4").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod storage;
mod url;

pub use config::ConfigError;
pub use error::{PolymediaError, PolymediaErrorKind, PolymediaResult};
pub use storage::{StorageError, StorageErrorKind};
pub use url::{UrlError, UrlErrorKind};
