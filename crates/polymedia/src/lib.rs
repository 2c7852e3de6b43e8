//! Polymedia - typed media sources, wherever the bytes live
//!
//! Polymedia lets application code handle a piece of media the same way
//! whether it is a file on disk, a buffer in memory, a URL, or an asset
//! shipped with the application, and convert between those backends without
//! losing what is known about it.
//!
//! # Features
//!
//! - **One trait for every backend**: [`MediaSource`] exposes name, MIME
//!   type, size and kind metadata
//! - **Typed kinds**: image, audio, video, document, link and other, with
//!   durations on audio and video
//! - **Classification**: by extension, by content signature, or by MIME type
//! - **Conversions**: file to memory, memory to file, asset to either
//! - **Exhaustive dispatch**: [`MediaFold`] with a mandatory fallback
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use polymedia::{
//!     AnyFileMedia, MediaOptions, MediaSource, PolymediaConfig, ToMemoryConvertible,
//!     env_from_config, init_tracing,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PolymediaConfig::load()?;
//!     init_tracing(config.logging())?;
//!
//!     let env = env_from_config(&config);
//!     let media = AnyFileMedia::detect_path(&env, "holiday.mp4", MediaOptions::default()).await;
//!     println!("{} is {} ({:?})", media.name(), media.kind(), media.size());
//!
//!     let memory = media.convert_to_memory().await?;
//!     println!("loaded {} bytes", memory.bytes().len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Polymedia is organized as a workspace with focused crates:
//!
//! - `polymedia_error` - Error types
//! - `polymedia_core` - Kinds, classification rules, collaborator traits, configuration
//! - `polymedia_storage` - Filesystem, MIME lookup and asset bundle adapters
//! - `polymedia_source` - The four media backends, dispatch and conversions
//!
//! This crate (`polymedia`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use polymedia_core::*;
pub use polymedia_error::*;
pub use polymedia_source::*;
pub use polymedia_storage::*;

use std::sync::Arc;

/// Native environment over the local filesystem, with `mime_guess`
/// classification, `lofty` metadata extraction and no asset bundle.
pub fn native_env() -> MediaEnv {
    MediaEnv::new(Arc::new(TokioFileFacade::new()), Arc::new(MimeClassifier::new()))
        .with_extractor(Arc::new(LoftyExtractor::new()))
}

/// Native environment whose asset bundle is the configured asset directory.
pub fn env_from_config(config: &PolymediaConfig) -> MediaEnv {
    let root = config.assets().root();
    tracing::debug!(assets = %root.display(), "Building media environment");

    native_env().with_bundle(Arc::new(DirectoryBundle::new(root.clone())))
}
