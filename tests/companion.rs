use std::fs;
use std::path::Path;

use clipdex::catalog::companion::match_companions;
use clipdex::catalog::resolve::resolve;

const PREFIX: &str = "/thumbnails/preview";

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

#[tokio::test]
async fn resolve_returns_path_for_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.webm");
    let resolved = resolve("a.webm", dir.path()).await;
    assert_eq!(resolved, Some(dir.path().join("a.webm")));
}

#[tokio::test]
async fn resolve_returns_none_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(resolve("missing.webm", dir.path()).await, None);
}

#[tokio::test]
async fn resolve_returns_none_for_missing_base_dir() {
    let base = Path::new("/nonexistent/preview/root");
    assert_eq!(resolve("a.webm", base).await, None);
}

#[tokio::test]
async fn both_companions_present_are_promoted() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.webm");
    touch(dir.path(), "a_thumb.jpg");

    let companions = match_companions("a", dir.path(), PREFIX).await;
    assert_eq!(companions.thumbnail, "/thumbnails/preview/a_thumb.jpg");
    assert_eq!(companions.preview, "/thumbnails/preview/a.webm");
}

#[tokio::test]
async fn missing_thumbnail_falls_back_to_both_defaults() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.webm");

    let companions = match_companions("a", dir.path(), PREFIX).await;
    assert_eq!(companions.thumbnail, "/thumbnails/preview/default.jpg");
    assert_eq!(companions.preview, "/thumbnails/preview/default.webm");
}

#[tokio::test]
async fn missing_preview_falls_back_to_both_defaults() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a_thumb.jpg");

    let companions = match_companions("a", dir.path(), PREFIX).await;
    assert_eq!(companions.thumbnail, "/thumbnails/preview/default.jpg");
    assert_eq!(companions.preview, "/thumbnails/preview/default.webm");
}

#[tokio::test]
async fn prefix_is_honored_in_promoted_paths() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "clip.webm");
    touch(dir.path(), "clip_thumb.jpg");

    let companions = match_companions("clip", dir.path(), "/assets").await;
    assert_eq!(companions.thumbnail, "/assets/clip_thumb.jpg");
    assert_eq!(companions.preview, "/assets/clip.webm");
}
