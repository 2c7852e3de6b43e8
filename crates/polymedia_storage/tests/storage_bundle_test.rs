//! Tests for asset bundle loaders.

use polymedia_core::BundleLoader;
use polymedia_error::{PolymediaErrorKind, StorageErrorKind};
use polymedia_storage::{DirectoryBundle, InMemoryBundle};
use tempfile::TempDir;

fn storage_kind(err: &polymedia_error::PolymediaError) -> &StorageErrorKind {
    match err.kind() {
        PolymediaErrorKind::Storage(e) => e.kind(),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_directory_bundle_loads_relative_asset() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("images")).unwrap();
    std::fs::write(temp_dir.path().join("images/logo.png"), b"png bytes").unwrap();

    let bundle = DirectoryBundle::new(temp_dir.path());
    let bytes = bundle.load("images/logo.png").await.unwrap();

    assert_eq!(bytes, b"png bytes");
    assert_eq!(bundle.root(), temp_dir.path());
}

#[tokio::test]
async fn test_directory_bundle_missing_asset() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = DirectoryBundle::new(temp_dir.path());

    let err = bundle.load("images/none.png").await.unwrap_err();
    assert_eq!(
        storage_kind(&err),
        &StorageErrorKind::NotFound("images/none.png".to_string())
    );
}

#[tokio::test]
async fn test_directory_bundle_rejects_escaping_paths() {
    let temp_dir = TempDir::new().unwrap();
    let bundle = DirectoryBundle::new(temp_dir.path().join("assets"));

    for path in ["../secret.txt", "/etc/passwd", "images/../../x"] {
        let err = bundle.load(path).await.unwrap_err();
        assert!(
            matches!(storage_kind(&err), StorageErrorKind::InvalidPath(_)),
            "{path} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_in_memory_bundle() {
    let bundle = InMemoryBundle::new().with_asset("sounds/click.wav", b"RIFF".to_vec());

    assert_eq!(bundle.load("sounds/click.wav").await.unwrap(), b"RIFF");
    assert!(!bundle.is_empty());

    let err = bundle.load("sounds/missing.wav").await.unwrap_err();
    assert!(matches!(storage_kind(&err), StorageErrorKind::NotFound(_)));
}
