//! Core data types for the polymedia library.
//!
//! This crate holds everything the media backends share: the byte-size unit,
//! the closed set of media kinds and their variant values, the classification
//! rules that map paths, bytes and MIME strings onto kinds, and the traits
//! through which the backends reach the platform (files, MIME tables,
//! metadata extraction, asset bundles).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod config;
mod kind;
mod options;
mod ports;
mod telemetry;
mod variant;

pub use bytesize::ByteSize;
pub use classify::{Classification, METADATA_TIMEOUT, classify_bytes, classify_path};
pub use config::{AssetConfig, LoggingConfig, PolymediaConfig};
pub use kind::MediaKind;
pub use options::MediaOptions;
pub use ports::{
    BundleLoader, EmptyBundle, ExtractSource, ExtractedMetadata, MetadataExtractor, NoMetadata,
    Platform, PlatformFileFacade, TypeClassifier,
};
pub use telemetry::init_tracing;
pub use variant::{
    AudioType, ConcreteVariant, DocumentType, FileType, ImageType, MediaVariant, OtherType,
    TimedVariant, UrlType, VideoType,
};
