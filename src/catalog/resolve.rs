use std::path::{Path, PathBuf};

/// Join `file_name` onto `base_dir` and confirm the file exists on disk.
///
/// Any access failure (missing file, permission denied) is reported as `None`
/// — this is the single existence-check primitive for companion lookups and
/// it never surfaces an error to the caller.
pub async fn resolve(file_name: &str, base_dir: &Path) -> Option<PathBuf> {
    let full = base_dir.join(file_name);
    match tokio::fs::try_exists(&full).await {
        Ok(true) => {
            tracing::debug!("Resolved path: {}", full.display());
            Some(full)
        }
        Ok(false) => {
            tracing::debug!("File not found: {}", full.display());
            None
        }
        Err(e) => {
            tracing::warn!("Cannot access {}: {}", full.display(), e);
            None
        }
    }
}
