use std::path::PathBuf;

use playlist_sync::{Error, utils::*};
use tempfile::TempDir;

// Helper function to write a song list into a fresh temp dir
fn write_song_list(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("song_list.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256, base64url without padding
    assert_eq!(challenge, "HGfpffSApehaWh1OQoi0h-f-k3IZ1CickraFS3UbMvk");
    assert_eq!(challenge.len(), 43);

    // Different input should produce different output
    let challenge2 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge2);

    assert!(
        challenge2
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_song_line_drops_artist() {
    assert_eq!(parse_song_line("A Song - Artist1"), Some("A Song".to_string()));
    // only the first separator counts
    assert_eq!(parse_song_line("Title - Artist - Live"), Some("Title".to_string()));
}

#[test]
fn test_parse_song_line_without_artist() {
    assert_eq!(parse_song_line("Just A Title"), Some("Just A Title".to_string()));
    // a hyphen without surrounding spaces is part of the title
    assert_eq!(parse_song_line("Re-Run - Band"), Some("Re-Run".to_string()));
}

#[test]
fn test_parse_song_line_blank() {
    assert_eq!(parse_song_line(""), None);
    assert_eq!(parse_song_line("   "), None);
    assert_eq!(parse_song_line("\t"), None);
}

#[test]
fn test_parse_song_line_normalizes() {
    assert_eq!(
        parse_song_line("  Don't Stop (Live) - Some Band  "),
        Some("Dont Stop Live".to_string())
    );
}

#[tokio::test]
async fn test_read_song_list_keeps_order_and_skips_blanks() {
    let (_dir, path) = write_song_list("A Song - Artist1\n\n  \nB Song - Artist2\n");

    let titles = read_song_list(&path).await.unwrap();

    assert_eq!(titles, vec!["A Song".to_string(), "B Song".to_string()]);
}

#[tokio::test]
async fn test_read_song_list_empty_file() {
    let (_dir, path) = write_song_list("");

    let titles = read_song_list(&path).await.unwrap();

    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_read_song_list_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = read_song_list(&path).await.unwrap_err();
    match err {
        Error::Input { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected input error, got {other:?}"),
    }
}
