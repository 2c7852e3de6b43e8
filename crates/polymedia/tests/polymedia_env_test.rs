//! Tests for environment construction from configuration.

use polymedia::{
    AnyFileMedia, ImageAssetMedia, MediaKind, MediaOptions, MediaSource, PolymediaConfig,
    ToMemoryConvertible, env_from_config, native_env,
};
use std::io::Write;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_configured_asset_root_backs_bundle() {
    let assets = TempDir::new().unwrap();
    std::fs::create_dir_all(assets.path().join("images")).unwrap();
    std::fs::write(assets.path().join("images/logo.png"), b"\x89PNG\r\n\x1a\n").unwrap();

    let mut config_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config_file, "[assets]\nroot = {:?}", assets.path().display().to_string()).unwrap();
    let config = PolymediaConfig::from_file(config_file.path()).unwrap();

    let env = env_from_config(&config);
    let logo = ImageAssetMedia::load(&env, "images/logo.png", None, MediaOptions::default()).await;

    assert_eq!(logo.size().map(|s| s.as_u64()), Some(8));
    assert_eq!(logo.convert_to_memory().await.unwrap().bytes(), b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_native_env_detects_files() {
    let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    std::fs::write(file.path(), b"%PDF-1.7").unwrap();

    let media =
        AnyFileMedia::detect_path(&native_env(), file.path(), MediaOptions::default()).await;

    assert_eq!(media.kind(), MediaKind::Document);
    assert_eq!(media.mime_type(), Some("application/pdf"));
}

#[tokio::test]
async fn test_native_env_reads_audio_duration() {
    // One second of 8 kHz mono 16-bit silence
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36u32 + 16000).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&[1, 0, 1, 0]);
    wav.extend_from_slice(&8000u32.to_le_bytes());
    wav.extend_from_slice(&16000u32.to_le_bytes());
    wav.extend_from_slice(&[2, 0, 16, 0]);
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&16000u32.to_le_bytes());
    wav.resize(wav.len() + 16000, 0);

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("silence.wav");
    std::fs::write(&path, &wav).unwrap();

    let media = AnyFileMedia::detect_path(&native_env(), &path, MediaOptions::default()).await;

    assert_eq!(media.kind(), MediaKind::Audio);
    let duration = media.metadata().duration().unwrap();
    assert!(duration.abs_diff(Duration::from_secs(1)) < Duration::from_millis(50));
}
