use std::path::Path;
use walkdir::WalkDir;

/// File extensions recognized as playable video, matched case-insensitively.
/// Order doubles as the precedence rule when two files share a basename: the
/// earlier extension wins.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];

/// True when the path's extension case-insensitively matches the supported set.
pub fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| VIDEO_EXTENSIONS.contains(&e.as_str()))
}

/// Recursively walk `root` and return every video file's path relative to
/// `root`, separators normalized to `/`.
///
/// Unreadable entries and subtrees log warn and contribute nothing; a missing
/// root yields an empty vec, never an error. The order of the returned paths
/// is whatever the walk produced — callers must not rely on it.
pub fn scan(root: &Path) -> Vec<String> {
    if !root.exists() {
        tracing::warn!("Video root does not exist, nothing to scan: {}", root.display());
        return Vec::new();
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Err(e) => {
                tracing::warn!("Cannot access entry: {}", e);
            }
            Ok(entry) if entry.file_type().is_file() && is_video(entry.path()) => {
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if !relative.as_os_str().is_empty() {
                    files.push(normalize_separators(relative));
                }
            }
            Ok(_) => {} // directory entries — walkdir handles recursion
        }
    }
    tracing::info!("Scanned {} video files in {}", files.len(), root.display());
    files
}

fn normalize_separators(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}
