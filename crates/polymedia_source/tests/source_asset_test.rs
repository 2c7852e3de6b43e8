//! Tests for bundled asset media.

mod test_utils;

use polymedia_core::{BundleLoader, ByteSize, MediaOptions};
use polymedia_source::{
    AudioAssetMedia, ImageAssetMedia, MediaSource, ToFileConvertible, ToMemoryConvertible,
};
use polymedia_storage::{DirectoryBundle, InMemoryBundle};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utils::{PNG_HEADER, native_env};

fn bundle() -> Arc<dyn BundleLoader> {
    Arc::new(
        InMemoryBundle::new()
            .with_asset("images/logo.png", PNG_HEADER.to_vec())
            .with_asset("sounds/click.wav", b"RIFF0000WAVE".to_vec()),
    )
}

#[tokio::test]
async fn test_load_measures_size_from_environment_bundle() {
    let env = native_env().with_bundle(bundle());

    let logo = ImageAssetMedia::load(&env, "images/logo.png", None, MediaOptions::default()).await;

    assert_eq!(logo.name(), "logo.png");
    assert_eq!(logo.size(), Some(ByteSize::b(16)));
    assert_eq!(logo.mime_type(), Some("image/png"));
    assert_eq!(logo.asset_path(), "images/logo.png");
}

#[tokio::test]
async fn test_load_with_explicit_bundle_and_options() {
    let env = native_env();
    let options = MediaOptions::default()
        .with_name("Click")
        .with_size(ByteSize::b(1))
        .with_duration(Duration::from_millis(80));

    let click = AudioAssetMedia::load(&env, "sounds/click.wav", Some(bundle()), options).await;

    assert_eq!(click.name(), "Click");
    assert_eq!(click.size(), Some(ByteSize::b(1)));
    assert_eq!(click.metadata().duration, Some(Duration::from_millis(80)));
}

#[tokio::test]
async fn test_missing_asset_has_unknown_size() {
    let env = native_env().with_bundle(bundle());

    let missing =
        ImageAssetMedia::load(&env, "images/none.png", None, MediaOptions::default()).await;

    assert_eq!(missing.size(), None);
    assert!(missing.convert_to_memory().await.is_err());
}

#[tokio::test]
async fn test_save_to_file_and_convert_to_memory() {
    let temp_dir = TempDir::new().unwrap();
    let env = native_env().with_bundle(bundle());
    let logo = ImageAssetMedia::load(&env, "images/logo.png", None, MediaOptions::default()).await;

    let file = logo
        .save_to_file(&env, &temp_dir.path().join("cache").join("logo.png"))
        .await
        .unwrap();
    assert_eq!(std::fs::read(file.path()).unwrap(), PNG_HEADER);
    assert_eq!(file.name(), "logo.png");
    assert_eq!(file.size(), Some(ByteSize::b(16)));

    let memory = logo.convert_to_memory().await.unwrap();
    assert_eq!(memory.bytes(), PNG_HEADER);
    assert_eq!(memory.mime_type(), Some("image/png"));
}

#[tokio::test]
async fn test_directory_bundle_assets() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("sounds")).unwrap();
    std::fs::write(temp_dir.path().join("sounds/click.wav"), b"RIFF").unwrap();

    let env = native_env().with_bundle(Arc::new(DirectoryBundle::new(temp_dir.path())));
    let click =
        AudioAssetMedia::load(&env, "sounds/click.wav", None, MediaOptions::default()).await;

    assert_eq!(click.size(), Some(ByteSize::b(4)));
    assert_eq!(click.read().await.unwrap(), b"RIFF");
}

#[tokio::test]
async fn test_equality_uses_bundle_identity() {
    let shared = bundle();
    let env = native_env();

    let logo = |loader: Arc<dyn BundleLoader>| {
        ImageAssetMedia::load(&env, "images/logo.png", Some(loader), MediaOptions::default())
    };
    let a = logo(shared.clone()).await;
    let b = logo(shared).await;
    let c = logo(bundle()).await;

    assert_eq!(a, b);
    assert_eq!(a.name(), c.name());
    assert_eq!(a.size(), c.size());
    assert_ne!(a, c);
}
