//! Media sources for polymedia.
//!
//! A media source is a piece of content plus what is known about it: a name,
//! a MIME type, a size and a kind-specific metadata value. The content lives
//! in one of four backends:
//!
//! - [`FileMedia`]: a file on the platform filesystem
//! - [`MemoryMedia`]: an owned byte buffer
//! - [`NetworkMedia`]: a URL (nothing is ever fetched)
//! - [`AssetMedia`]: a path inside an application asset bundle
//!
//! Every backend is generic over its metadata type. Concrete kinds have
//! aliases such as [`VideoFileMedia`] or [`ImageMemoryMedia`]; the `Any*`
//! aliases hold a kind decided at runtime by classification and can be
//! narrowed afterwards.
//!
//! Code that must work for any backend uses the [`MediaSource`] trait, or
//! [`MediaSource::fold`] when it needs the backend itself. Sources move
//! between backends through [`ToFileConvertible`] and
//! [`ToMemoryConvertible`]; each conversion returns a new source.
//!
//! # Example
//!
//! ```rust
//! use polymedia_core::{MediaKind, MediaOptions, MediaVariant};
//! use polymedia_source::{AnyNetworkMedia, MediaEnv, MediaSource};
//! use polymedia_storage::{MimeClassifier, TokioFileFacade};
//! use std::sync::Arc;
//!
//! let env = MediaEnv::new(Arc::new(TokioFileFacade::new()), Arc::new(MimeClassifier::new()));
//! let media =
//!     AnyNetworkMedia::from_url(&env, "https://cdn.example.com/a.mp4", MediaOptions::default())?;
//!
//! assert_eq!(media.name(), "a.mp4");
//! assert_eq!(media.metadata().kind(), MediaKind::Video);
//! # Ok::<(), polymedia_error::PolymediaError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod convert;
mod env;
mod extract;
mod file;
mod fold;
mod info;
mod memory;
mod network;
mod source;
mod thumbnail;

pub use asset::AssetMedia;
pub use convert::{ToFileConvertible, ToMemoryConvertible};
pub use env::MediaEnv;
pub use file::{FileMedia, PlatformFile};
pub use fold::MediaFold;
pub use memory::MemoryMedia;
pub use network::NetworkMedia;
pub use source::{Backend, BackendRef, Media, MediaSource};
pub use thumbnail::ThumbnailMedia;

use polymedia_core::{AudioType, DocumentType, FileType, ImageType, OtherType, UrlType, VideoType};

/// Image file.
pub type ImageFileMedia = FileMedia<ImageType>;
/// Audio file.
pub type AudioFileMedia = FileMedia<AudioType>;
/// Video file.
pub type VideoFileMedia = FileMedia<VideoType>;
/// Document file.
pub type DocumentFileMedia = FileMedia<DocumentType>;
/// File of no recognised kind.
pub type OtherFileMedia = FileMedia<OtherType>;
/// File of a kind decided at runtime.
pub type AnyFileMedia = FileMedia<FileType>;

/// Image bytes.
pub type ImageMemoryMedia = MemoryMedia<ImageType>;
/// Audio bytes.
pub type AudioMemoryMedia = MemoryMedia<AudioType>;
/// Video bytes.
pub type VideoMemoryMedia = MemoryMedia<VideoType>;
/// Document bytes.
pub type DocumentMemoryMedia = MemoryMedia<DocumentType>;
/// Bytes of no recognised kind.
pub type OtherMemoryMedia = MemoryMedia<OtherType>;
/// Bytes of a kind decided at runtime.
pub type AnyMemoryMedia = MemoryMedia<FileType>;

/// Image at a URL.
pub type ImageNetworkMedia = NetworkMedia<ImageType>;
/// Audio at a URL.
pub type AudioNetworkMedia = NetworkMedia<AudioType>;
/// Video at a URL.
pub type VideoNetworkMedia = NetworkMedia<VideoType>;
/// Document at a URL.
pub type DocumentNetworkMedia = NetworkMedia<DocumentType>;
/// Content of no recognised kind at a URL.
pub type OtherNetworkMedia = NetworkMedia<OtherType>;
/// Plain hyperlink. Size is always zero and the MIME type is `"url"`.
pub type UrlMedia = NetworkMedia<UrlType>;
/// URL whose kind was decided at runtime.
pub type AnyNetworkMedia = NetworkMedia<FileType>;

/// Image asset.
pub type ImageAssetMedia = AssetMedia<ImageType>;
/// Audio asset.
pub type AudioAssetMedia = AssetMedia<AudioType>;
/// Video asset.
pub type VideoAssetMedia = AssetMedia<VideoType>;
/// Document asset.
pub type DocumentAssetMedia = AssetMedia<DocumentType>;
/// Asset of no recognised kind.
pub type OtherAssetMedia = AssetMedia<OtherType>;
/// Asset of a kind decided at runtime.
pub type AnyAssetMedia = AssetMedia<FileType>;
