//! Platform adapters for polymedia.
//!
//! The media backends in `polymedia_source` talk to the outside world only
//! through the traits in `polymedia_core`. This crate provides the adapters a
//! native application plugs in:
//!
//! - [`TokioFileFacade`]: file operations on `tokio::fs`
//! - [`MimeClassifier`]: MIME lookup by extension and by content signature
//! - [`LoftyExtractor`]: container type and duration of audio files
//! - [`DirectoryBundle`] and [`InMemoryBundle`]: asset bundle loaders
//!
//! # Example
//!
//! ```rust
//! use polymedia_core::{PlatformFileFacade, TypeClassifier};
//! use polymedia_storage::{MimeClassifier, TokioFileFacade};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let files = TokioFileFacade::new();
//! files.write("/tmp/polymedia/hello.txt".as_ref(), b"hi").await?;
//! assert!(files.exists("/tmp/polymedia/hello.txt".as_ref()).await);
//!
//! let classifier = MimeClassifier::new();
//! assert_eq!(classifier.mime_from_path("song.mp3", None).as_deref(), Some("audio/mpeg"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod classifier;
mod extractor;
mod filesystem;
mod signature;

pub use bundle::{DirectoryBundle, InMemoryBundle};
pub use classifier::MimeClassifier;
pub use extractor::LoftyExtractor;
pub use filesystem::TokioFileFacade;
