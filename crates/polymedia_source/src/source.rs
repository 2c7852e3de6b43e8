//! The backend-independent view of a media source.

use crate::{AssetMedia, FileMedia, MediaFold, MemoryMedia, NetworkMedia};
use polymedia_core::{ByteSize, MediaKind, MediaVariant};

/// Where a source's content lives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum Backend {
    /// Platform file
    #[display("file")]
    File,
    /// Owned byte buffer
    #[display("memory")]
    Memory,
    /// URL
    #[display("network")]
    Network,
    /// Application asset bundle
    #[display("asset")]
    Asset,
}

/// Borrowed view of a source as its concrete backend.
#[derive(Debug)]
pub enum BackendRef<'a, K: MediaVariant> {
    /// File backend
    File(&'a FileMedia<K>),
    /// Memory backend
    Memory(&'a MemoryMedia<K>),
    /// Network backend
    Network(&'a NetworkMedia<K>),
    /// Asset backend
    Asset(&'a AssetMedia<K>),
}

impl<K: MediaVariant> BackendRef<'_, K> {
    /// Which backend this is.
    pub fn backend(&self) -> Backend {
        match self {
            BackendRef::File(_) => Backend::File,
            BackendRef::Memory(_) => Backend::Memory,
            BackendRef::Network(_) => Backend::Network,
            BackendRef::Asset(_) => Backend::Asset,
        }
    }
}

/// A piece of media, wherever it lives.
///
/// Equality between sources is structural: two sources are equal when their
/// properties and backing content (path, bytes, URL or asset) are equal.
pub trait MediaSource {
    /// Metadata type: one of the concrete kinds, or `FileType` when the kind
    /// was decided at runtime.
    type Kind: MediaVariant;

    /// Display or file name. Empty when nothing better is known.
    fn name(&self) -> &str;

    /// MIME type, if known.
    fn mime_type(&self) -> Option<&str>;

    /// Size of the content, if known.
    fn size(&self) -> Option<ByteSize>;

    /// Kind-specific metadata.
    fn metadata(&self) -> &Self::Kind;

    /// The concrete backend, or `None` for composite sources.
    fn as_backend(&self) -> Option<BackendRef<'_, Self::Kind>>;

    /// Kind of the metadata.
    fn kind(&self) -> MediaKind {
        self.metadata().kind()
    }

    /// Which backend holds the content.
    fn backend(&self) -> Option<Backend> {
        self.as_backend().map(|backend| backend.backend())
    }

    /// Dispatch on the backend.
    ///
    /// Calls the handler registered for this source's backend with a copy
    /// narrowed to the handler's kind. When no handler is registered for the
    /// backend, or the kinds disagree, calls the fallback instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymedia_core::{ImageType, MediaOptions, VideoType};
    /// use polymedia_source::{ImageMemoryMedia, MediaFold, MediaSource};
    ///
    /// let media = ImageMemoryMedia::new(vec![1, 2, 3], MediaOptions::default());
    ///
    /// let size = media.fold(
    ///     MediaFold::<ImageType, _>::new(|| 0).on_memory(|memory| memory.bytes().len()),
    /// );
    /// assert_eq!(size, 3);
    ///
    /// let video = media.fold(MediaFold::<VideoType, _>::new(|| "else").on_memory(|_| "video"));
    /// assert_eq!(video, "else");
    /// ```
    fn fold<T: MediaVariant, R>(&self, fold: MediaFold<'_, T, R>) -> R
    where
        Self: Sized,
    {
        fold.apply(self.as_backend())
    }
}

/// An owned source on any backend.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Media<K: MediaVariant> {
    /// File backend
    File(FileMedia<K>),
    /// Memory backend
    Memory(MemoryMedia<K>),
    /// Network backend
    Network(NetworkMedia<K>),
    /// Asset backend
    Asset(AssetMedia<K>),
}

macro_rules! delegate {
    ($self:ident, $media:ident => $body:expr) => {
        match $self {
            Media::File($media) => $body,
            Media::Memory($media) => $body,
            Media::Network($media) => $body,
            Media::Asset($media) => $body,
        }
    };
}

impl<K: MediaVariant> MediaSource for Media<K> {
    type Kind = K;

    fn name(&self) -> &str {
        delegate!(self, media => media.name())
    }

    fn mime_type(&self) -> Option<&str> {
        delegate!(self, media => media.mime_type())
    }

    fn size(&self) -> Option<ByteSize> {
        delegate!(self, media => media.size())
    }

    fn metadata(&self) -> &K {
        delegate!(self, media => media.metadata())
    }

    fn as_backend(&self) -> Option<BackendRef<'_, K>> {
        delegate!(self, media => media.as_backend())
    }
}

/// Implements [`MediaSource`] for a backend struct holding a `MediaInfo`
/// in its `info` field.
macro_rules! impl_media_source {
    ($backend:ident, $variant:ident) => {
        impl<K: polymedia_core::MediaVariant> $crate::MediaSource for $backend<K> {
            type Kind = K;

            fn name(&self) -> &str {
                &self.info.name
            }

            fn mime_type(&self) -> Option<&str> {
                self.info.mime_type.as_deref()
            }

            fn size(&self) -> Option<polymedia_core::ByteSize> {
                self.info.size
            }

            fn metadata(&self) -> &K {
                &self.info.metadata
            }

            fn as_backend(&self) -> Option<$crate::BackendRef<'_, K>> {
                Some($crate::BackendRef::$variant(self))
            }
        }
    };
}

pub(crate) use impl_media_source;
