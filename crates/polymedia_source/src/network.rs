//! Media referenced by URL.

use crate::MediaEnv;
use crate::info::MediaInfo;
use crate::source::impl_media_source;
use polymedia_core::{
    ByteSize, ConcreteVariant, FileType, MediaKind, MediaOptions, MediaVariant, classify_path,
};
use percent_encoding::percent_decode_str;
use polymedia_error::{PolymediaResult, UrlError, UrlErrorKind};
use std::time::Duration;
use url::Url;

/// MIME type recorded for plain hyperlinks.
const URL_MIME_TYPE: &str = "url";

/// Media that lives at a URL.
///
/// Only the locator and what is known about it are stored; nothing is ever
/// downloaded, and network sources cannot be converted to other backends.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkMedia<K> {
    info: MediaInfo<K>,
    uri: Url,
}

impl_media_source!(NetworkMedia, Network);

impl<K: ConcreteVariant> NetworkMedia<K> {
    /// Media of kind `K` at `uri`.
    ///
    /// The name defaults to the last path segment. Plain hyperlinks
    /// ([`UrlType`](polymedia_core::UrlType)) always have size zero and MIME
    /// type `"url"`, whatever `options` say.
    pub fn new(uri: Url, options: MediaOptions) -> Self {
        build(uri, &options, K::KIND, options.mime_type().clone(), K::with_duration)
    }

    /// Parse `url` and wrap it as media of kind `K`.
    pub fn url(url: &str, options: MediaOptions) -> PolymediaResult<Self> {
        Ok(Self::new(parse(url)?, options))
    }
}

impl NetworkMedia<FileType> {
    /// Parse `url`, classify it by the extension of its path, and wrap it as
    /// media of that kind.
    ///
    /// Fails only when `url` is empty or malformed. No request is made.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymedia_core::{MediaKind, MediaOptions};
    /// use polymedia_source::{AnyNetworkMedia, MediaEnv, MediaSource};
    /// use polymedia_storage::{MimeClassifier, TokioFileFacade};
    /// use std::sync::Arc;
    ///
    /// let env = MediaEnv::new(Arc::new(TokioFileFacade::new()), Arc::new(MimeClassifier::new()));
    ///
    /// let song =
    ///     AnyNetworkMedia::from_url(&env, "https://x.org/b.mp3?sig=1", MediaOptions::default())
    ///         .unwrap();
    /// assert_eq!(song.kind(), MediaKind::Audio);
    ///
    /// assert!(AnyNetworkMedia::from_url(&env, "not a url", MediaOptions::default()).is_err());
    /// ```
    pub fn from_url(env: &MediaEnv, url: &str, options: MediaOptions) -> PolymediaResult<Self> {
        let uri = parse(url)?;
        let (kind, mime_type) = classify_path(
            uri.path(),
            options.mime_type().as_deref(),
            env.classifier().as_ref(),
        )
        .into_parts();
        let kind = options.kind().unwrap_or(kind);

        tracing::debug!(%uri, %kind, "Classified network media");
        Ok(build(uri, &options, kind, mime_type, |duration| {
            FileType::new(kind, duration)
        }))
    }

    /// [`from_url`](Self::from_url) for an optional input, with any failure
    /// turned into `None`.
    pub fn from_url_or_none(
        env: &MediaEnv,
        url: Option<&str>,
        options: MediaOptions,
    ) -> Option<Self> {
        match Self::from_url(env, url?, options) {
            Ok(media) => Some(media),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unusable URL");
                None
            }
        }
    }
}

impl<K: MediaVariant> NetworkMedia<K> {
    /// The locator.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// This source with kind `T`, or `None` if the metadata is of another kind.
    pub fn narrow<T: MediaVariant>(self) -> Option<NetworkMedia<T>> {
        let Self { info, uri } = self;
        info.narrow().map(|info| NetworkMedia { info, uri })
    }

    /// This source with its kind decided at runtime.
    pub fn erase(self) -> NetworkMedia<FileType> {
        NetworkMedia {
            info: self.info.erase(),
            uri: self.uri,
        }
    }
}

fn parse(url: &str) -> PolymediaResult<Url> {
    if url.trim().is_empty() {
        return Err(UrlError::new(UrlErrorKind::Empty).into());
    }

    Url::parse(url).map_err(|e| {
        UrlError::new(UrlErrorKind::Malformed {
            url: url.to_string(),
            reason: e.to_string(),
        })
        .into()
    })
}

fn build<K>(
    uri: Url,
    options: &MediaOptions,
    kind: MediaKind,
    mime_type: Option<String>,
    metadata: impl FnOnce(Option<Duration>) -> K,
) -> NetworkMedia<K> {
    let name = options.name().clone().unwrap_or_else(|| {
        let segment = uri
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        percent_decode_str(segment).decode_utf8_lossy().into_owned()
    });

    let (size, mime_type) = if kind == MediaKind::Url {
        (Some(ByteSize::b(0)), Some(URL_MIME_TYPE.to_string()))
    } else {
        (*options.size(), mime_type)
    };

    NetworkMedia {
        info: MediaInfo {
            name,
            mime_type,
            size,
            metadata: metadata(*options.duration()),
        },
        uri,
    }
}
