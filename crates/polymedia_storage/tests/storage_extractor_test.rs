//! Tests for the lofty metadata extractor.

use polymedia_core::{ExtractSource, MetadataExtractor};
use polymedia_storage::LoftyExtractor;
use std::time::Duration;
use tempfile::TempDir;

const TIMEOUT: Duration = Duration::from_secs(3);

/// A mono 16-bit PCM WAV file holding `seconds` of silence at 8 kHz.
fn silent_wav(seconds: u32) -> Vec<u8> {
    let sample_rate: u32 = 8000;
    let data_len = sample_rate * 2 * seconds;

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(wav.len() + data_len as usize, 0);
    wav
}

fn roughly(duration: Option<Duration>, expected: Duration) -> bool {
    duration.is_some_and(|d| d.abs_diff(expected) < Duration::from_millis(50))
}

#[tokio::test]
async fn test_extracts_wav_from_bytes() {
    let wav = silent_wav(2);

    let found = LoftyExtractor::new()
        .extract(ExtractSource::Bytes(&wav), TIMEOUT)
        .await
        .unwrap();

    assert_eq!(found.mime_type().as_deref(), Some("audio/wav"));
    assert!(roughly(*found.duration(), Duration::from_secs(2)));
}

#[tokio::test]
async fn test_extracts_wav_from_file_without_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recording");
    std::fs::write(&path, silent_wav(1)).unwrap();

    let found = LoftyExtractor::new()
        .extract(ExtractSource::File(&path), TIMEOUT)
        .await
        .unwrap();

    assert_eq!(found.mime_type().as_deref(), Some("audio/wav"));
    assert!(roughly(*found.duration(), Duration::from_secs(1)));
}

#[tokio::test]
async fn test_unrecognised_bytes_yield_nothing() {
    let found = LoftyExtractor::new()
        .extract(ExtractSource::Bytes(b"definitely not audio"), TIMEOUT)
        .await;

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_missing_file_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gone.mp3");

    let found = LoftyExtractor::new()
        .extract(ExtractSource::File(&path), TIMEOUT)
        .await;

    assert_eq!(found, None);
}
