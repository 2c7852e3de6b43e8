//! Exhaustive dispatch over backends.

use crate::{AssetMedia, BackendRef, FileMedia, MemoryMedia, NetworkMedia};
use polymedia_core::MediaVariant;

type Handler<'a, M, R> = Option<Box<dyn FnOnce(M) -> R + 'a>>;

/// A set of per-backend handlers with a mandatory fallback.
///
/// Handlers are typed by the kind they accept. A handler fires only when the
/// source is on its backend *and* its metadata narrows to `T`; everything
/// else reaches the fallback. Exactly one closure runs per fold.
pub struct MediaFold<'a, T: MediaVariant, R> {
    file: Handler<'a, FileMedia<T>, R>,
    memory: Handler<'a, MemoryMedia<T>, R>,
    network: Handler<'a, NetworkMedia<T>, R>,
    asset: Handler<'a, AssetMedia<T>, R>,
    or_else: Box<dyn FnOnce() -> R + 'a>,
}

impl<'a, T: MediaVariant, R> MediaFold<'a, T, R> {
    /// Start a fold with only the fallback.
    pub fn new(or_else: impl FnOnce() -> R + 'a) -> Self {
        Self {
            file: None,
            memory: None,
            network: None,
            asset: None,
            or_else: Box::new(or_else),
        }
    }

    /// Handle file sources.
    pub fn on_file(mut self, handler: impl FnOnce(FileMedia<T>) -> R + 'a) -> Self {
        self.file = Some(Box::new(handler));
        self
    }

    /// Handle memory sources.
    pub fn on_memory(mut self, handler: impl FnOnce(MemoryMedia<T>) -> R + 'a) -> Self {
        self.memory = Some(Box::new(handler));
        self
    }

    /// Handle network sources.
    pub fn on_network(mut self, handler: impl FnOnce(NetworkMedia<T>) -> R + 'a) -> Self {
        self.network = Some(Box::new(handler));
        self
    }

    /// Handle asset sources.
    pub fn on_asset(mut self, handler: impl FnOnce(AssetMedia<T>) -> R + 'a) -> Self {
        self.asset = Some(Box::new(handler));
        self
    }

    /// Run the fold against a backend view.
    pub fn apply<K: MediaVariant>(self, source: Option<BackendRef<'_, K>>) -> R {
        let Self {
            file,
            memory,
            network,
            asset,
            or_else,
        } = self;

        let handled = match source {
            Some(BackendRef::File(media)) => {
                file.and_then(|handler| media.clone().narrow::<T>().map(handler))
            }
            Some(BackendRef::Memory(media)) => {
                memory.and_then(|handler| media.clone().narrow::<T>().map(handler))
            }
            Some(BackendRef::Network(media)) => {
                network.and_then(|handler| media.clone().narrow::<T>().map(handler))
            }
            Some(BackendRef::Asset(media)) => {
                asset.and_then(|handler| media.clone().narrow::<T>().map(handler))
            }
            None => None,
        };

        handled.unwrap_or_else(or_else)
    }
}
