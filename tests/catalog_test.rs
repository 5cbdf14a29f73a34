mod common;

use common::{Call, MockService, item};
use playlist_sync::{
    Error,
    matching::{Catalog, build_catalog, find_master_playlists, is_master_playlist},
};

#[test]
fn test_is_master_playlist_ignores_case() {
    assert!(is_master_playlist("Master Rock", "master"));
    assert!(is_master_playlist("MASTER Jazz", "master"));
    assert!(is_master_playlist("my masterpiece", "Master"));
    assert!(!is_master_playlist("Pop Hits", "master"));
}

#[tokio::test]
async fn test_find_master_playlists() {
    let mut service = MockService::new()
        .with_playlist("p1", "Master Rock", vec![])
        .with_playlist("p2", "Pop Hits", vec![])
        .with_playlist("p3", "MASTER Jazz", vec![]);

    let masters = find_master_playlists(&mut service, "master").await.unwrap();
    let names: Vec<&str> = masters.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Master Rock", "MASTER Jazz"]);
}

#[tokio::test]
async fn test_build_catalog_reads_only_master_playlists() {
    let mut service = MockService::new()
        .with_playlist("p1", "Master Rock", vec![item("Song One", "a")])
        .with_playlist("p2", "Pop Hits", vec![item("Pop Song", "x")])
        .with_playlist("p3", "MASTER Jazz", vec![item("Blue (Live)", "b")]);

    let catalog = build_catalog(&mut service, "master").await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Song One").unwrap().native_id, "a");
    // keys are normalized titles
    assert_eq!(catalog.get("Blue Live").unwrap().native_id, "b");
    assert!(catalog.get("Pop Song").is_none());
    assert!(!service.calls.contains(&Call::PlaylistItems("p2".to_string())));
}

#[tokio::test]
async fn test_build_catalog_without_masters_is_empty() {
    let mut service = MockService::new().with_playlist("p1", "Pop Hits", vec![item("Pop", "x")]);

    let catalog = build_catalog(&mut service, "master").await.unwrap();

    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_build_catalog_propagates_source_errors() {
    let mut service = MockService::new().with_playlist("p1", "Master", vec![item("Song", "a")]);
    service.failing.push("p1".to_string());

    let result = build_catalog(&mut service, "master").await;

    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_build_catalog_later_duplicate_wins() {
    let mut service = MockService::new()
        .with_playlist("p1", "Master One", vec![item("Song", "first"), item("Other", "o")])
        .with_playlist("p2", "Master Two", vec![item("Song", "second")]);

    let catalog = build_catalog(&mut service, "master").await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Song").unwrap().native_id, "second");
    // the key keeps its first position
    let keys: Vec<&str> = catalog.keys().collect();
    assert_eq!(keys, vec!["Song", "Other"]);
}

#[test]
fn test_catalog_from_iter_normalizes_keys() {
    let catalog: Catalog = vec![item("Don't Stop", "a"), item("Dont Stop", "b")]
        .into_iter()
        .collect();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("Dont Stop").unwrap().native_id, "b");
}
