use std::fs;
use std::path::{Path, PathBuf};

use clipdex::catalog::scanner::{is_video, scan};

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

#[test]
fn nonexistent_root_returns_empty() {
    let files = scan(Path::new("/nonexistent/path/does/not/exist"));
    assert!(files.is_empty());
}

#[test]
fn empty_root_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan(dir.path()).is_empty());
}

#[test]
fn discovers_nested_videos_with_relative_slash_paths() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("top.mp4"));
    touch(&dir.path().join("clips/deep/nested.webm"));

    let mut files = scan(dir.path());
    files.sort();
    assert_eq!(files, vec!["clips/deep/nested.webm", "top.mp4"]);
}

#[test]
fn ignores_non_video_extensions() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("movie.mp4"));
    touch(&dir.path().join("notes.txt"));
    touch(&dir.path().join("cover.jpg"));
    touch(&dir.path().join("clip.mkv"));

    assert_eq!(scan(dir.path()), vec!["movie.mp4"]);
}

#[test]
fn extension_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("SHOUTY.MP4"));
    touch(&dir.path().join("Mixed.WebM"));

    let mut files = scan(dir.path());
    files.sort();
    assert_eq!(files, vec!["Mixed.WebM", "SHOUTY.MP4"]);
}

#[cfg(unix)]
#[test]
fn unreadable_subtree_is_skipped_and_siblings_survive() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("ok/a.mp4"));
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden.mp4"), b"").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not bind for root; probe instead of asserting blind.
    let denied = fs::read_dir(&locked).is_err();

    let files = scan(dir.path());

    // Restore before the tempdir tries to clean itself up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(files.contains(&"ok/a.mp4".to_string()));
    if denied {
        assert_eq!(files, vec!["ok/a.mp4"]);
    }
}

#[test]
fn is_video_checks_extension_only() {
    assert!(is_video(&PathBuf::from("a/b/c.mp4")));
    assert!(is_video(&PathBuf::from("c.WEBM")));
    assert!(!is_video(&PathBuf::from("c.mp4.part")));
    assert!(!is_video(&PathBuf::from("no_extension")));
}
