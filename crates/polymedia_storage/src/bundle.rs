//! Asset bundle loaders.

use polymedia_core::BundleLoader;
use polymedia_error::{PolymediaResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Bundle whose assets are files under a root directory.
///
/// Asset paths are relative to the root; absolute paths and `..` segments
/// are rejected so an asset path can never escape the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    /// Create a bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the bundle.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, asset_path: &str) -> PolymediaResult<PathBuf> {
        let relative = Path::new(asset_path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(
                StorageError::new(StorageErrorKind::InvalidPath(asset_path.to_string())).into(),
            );
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl BundleLoader for DirectoryBundle {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    async fn load(&self, asset_path: &str) -> PolymediaResult<Vec<u8>> {
        let path = self.resolve(asset_path)?;

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(asset_path.to_string()))
            } else {
                StorageError::new(StorageErrorKind::AssetLoad(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(size = data.len(), "Loaded asset");
        Ok(data)
    }
}

/// Bundle held entirely in memory.
///
/// # Examples
///
/// ```
/// use polymedia_storage::InMemoryBundle;
///
/// let bundle = InMemoryBundle::new()
///     .with_asset("images/logo.png", vec![0x89, 0x50, 0x4E, 0x47])
///     .with_asset("sounds/click.wav", b"RIFF".to_vec());
/// assert_eq!(bundle.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryBundle {
    assets: HashMap<String, Vec<u8>>,
}

impl InMemoryBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset.
    pub fn with_asset(mut self, asset_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.insert(asset_path.into(), bytes);
        self
    }

    /// Number of assets in the bundle.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the bundle holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[async_trait::async_trait]
impl BundleLoader for InMemoryBundle {
    async fn load(&self, asset_path: &str) -> PolymediaResult<Vec<u8>> {
        self.assets.get(asset_path).cloned().ok_or_else(|| {
            StorageError::new(StorageErrorKind::NotFound(asset_path.to_string())).into()
        })
    }
}
