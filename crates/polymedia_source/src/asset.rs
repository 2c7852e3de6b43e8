//! Media bundled with the application.

use crate::info::MediaInfo;
use crate::source::impl_media_source;
use crate::{FileMedia, MediaEnv, MemoryMedia, PlatformFile, ToFileConvertible, ToMemoryConvertible};
use polymedia_core::{BundleLoader, ByteSize, ConcreteVariant, FileType, MediaOptions, MediaVariant};
use polymedia_error::PolymediaResult;
use std::path::Path;
use std::sync::Arc;

/// Media stored in an asset bundle.
///
/// Equality compares the bundle by identity: the same asset path in two
/// different bundle instances is two different sources.
#[derive(Debug, Clone)]
pub struct AssetMedia<K> {
    info: MediaInfo<K>,
    asset_path: String,
    bundle: Arc<dyn BundleLoader>,
}

impl<K: PartialEq> PartialEq for AssetMedia<K> {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info
            && self.asset_path == other.asset_path
            && std::ptr::addr_eq(Arc::as_ptr(&self.bundle), Arc::as_ptr(&other.bundle))
    }
}

impl_media_source!(AssetMedia, Asset);

impl<K: ConcreteVariant> AssetMedia<K> {
    /// Media of kind `K` for the asset at `asset_path`.
    ///
    /// Without a `bundle` the environment's bundle is used. An unknown size
    /// is measured by loading the asset once; if that fails the size stays
    /// unknown.
    #[tracing::instrument(skip(env, bundle, options))]
    pub async fn load(
        env: &MediaEnv,
        asset_path: &str,
        bundle: Option<Arc<dyn BundleLoader>>,
        options: MediaOptions,
    ) -> Self {
        let bundle = bundle.unwrap_or_else(|| Arc::clone(env.bundle()));

        let size = match options.size() {
            Some(size) => Some(*size),
            None => match bundle.load(asset_path).await {
                Ok(bytes) => Some(ByteSize::b(bytes.len() as u64)),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not measure asset");
                    None
                }
            },
        };

        let mime_type = options
            .mime_type()
            .clone()
            .or_else(|| env.classifier().mime_from_path(asset_path, None));

        let name = options.name().clone().unwrap_or_else(|| {
            asset_path
                .rsplit('/')
                .next()
                .unwrap_or(asset_path)
                .to_string()
        });

        Self {
            info: MediaInfo {
                name,
                mime_type,
                size,
                metadata: K::with_duration(*options.duration()),
            },
            asset_path: asset_path.to_string(),
            bundle,
        }
    }
}

impl<K: MediaVariant> AssetMedia<K> {
    /// Path of the asset inside its bundle.
    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// The bundle the asset is loaded from.
    pub fn bundle(&self) -> &Arc<dyn BundleLoader> {
        &self.bundle
    }

    /// Load the asset content.
    pub async fn read(&self) -> PolymediaResult<Vec<u8>> {
        self.bundle.load(&self.asset_path).await
    }

    /// This source with kind `T`, or `None` if the metadata is of another kind.
    pub fn narrow<T: MediaVariant>(self) -> Option<AssetMedia<T>> {
        let Self {
            info,
            asset_path,
            bundle,
        } = self;
        info.narrow().map(|info| AssetMedia {
            info,
            asset_path,
            bundle,
        })
    }

    /// This source with its kind decided at runtime.
    pub fn erase(self) -> AssetMedia<FileType> {
        AssetMedia {
            info: self.info.erase(),
            asset_path: self.asset_path,
            bundle: self.bundle,
        }
    }
}

#[async_trait::async_trait]
impl<K: MediaVariant> ToFileConvertible for AssetMedia<K> {
    #[tracing::instrument(skip(self, env), fields(asset = %self.asset_path))]
    async fn save_to_file(&self, env: &MediaEnv, path: &Path) -> PolymediaResult<FileMedia<K>> {
        let bytes = self.read().await?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            env.files().ensure_directory(parent).await?;
        }
        env.files().write(path, &bytes).await?;

        let mut file = PlatformFile::new(path);
        if let Some(mime_type) = &self.info.mime_type {
            file = file.with_mime_type(mime_type.clone());
        }

        tracing::debug!(size = bytes.len(), "Saved asset to file");
        Ok(FileMedia::from_parts(
            self.info.clone().with_size(Some(ByteSize::b(bytes.len() as u64))),
            file,
            Arc::clone(env.files()),
        ))
    }
}

#[async_trait::async_trait]
impl<K: MediaVariant> ToMemoryConvertible for AssetMedia<K> {
    #[tracing::instrument(skip(self), fields(asset = %self.asset_path))]
    async fn convert_to_memory(&self) -> PolymediaResult<MemoryMedia<K>> {
        let bytes = self.read().await?;
        Ok(MemoryMedia::from_parts(self.info.clone(), bytes))
    }
}
