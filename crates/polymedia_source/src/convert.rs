//! Conversions between backends.

use crate::{FileMedia, MediaEnv, MediaSource, MemoryMedia};
use polymedia_error::PolymediaResult;
use std::path::Path;

/// Sources whose content can be written to a file.
///
/// Implemented by the file, memory and asset backends. Network sources hold
/// no content and implement neither conversion.
#[async_trait::async_trait]
pub trait ToFileConvertible: MediaSource + Sync {
    /// Write the content to `path`, creating missing directories and
    /// replacing any existing file, and return a source for the file.
    async fn save_to_file(
        &self,
        env: &MediaEnv,
        path: &Path,
    ) -> PolymediaResult<FileMedia<Self::Kind>>;

    /// Save into `folder` under this source's name.
    async fn save_to_folder(
        &self,
        env: &MediaEnv,
        folder: &Path,
    ) -> PolymediaResult<FileMedia<Self::Kind>> {
        let path = folder.join(self.name());
        self.save_to_file(env, &path).await
    }
}

/// Sources whose content can be loaded into memory.
#[async_trait::async_trait]
pub trait ToMemoryConvertible: MediaSource + Sync {
    /// Load the full content into a memory source with the same properties.
    async fn convert_to_memory(&self) -> PolymediaResult<MemoryMedia<Self::Kind>>;
}
