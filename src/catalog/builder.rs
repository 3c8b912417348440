use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::catalog::companion::match_companions;
use crate::catalog::metadata::{created_at, DurationProber};
use crate::catalog::record::{display_order, VideoRecord};
use crate::catalog::scanner::{self, VIDEO_EXTENSIONS};
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The video root yielded zero playable files. A distinct outcome mapped
    /// to "not found" at the HTTP boundary, not an internal failure.
    #[error("no videos found in {0}")]
    Empty(PathBuf),
    #[error("failed to create preview directory {path}: {source}")]
    PreviewDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Build the full catalog for one request: ensure the preview root exists,
/// discover video files under the video root, enrich every file concurrently,
/// and return the records sorted by display name.
///
/// Per-item failures (missing companions, unreadable stat) degrade that one
/// record to its fallbacks inside its own task and never abort the build;
/// only task panics and a preview-root creation failure surface as errors.
pub async fn build(
    config: Arc<Config>,
    prober: Arc<dyn DurationProber>,
) -> Result<Vec<VideoRecord>, CatalogError> {
    tokio::fs::create_dir_all(&config.preview_root)
        .await
        .map_err(|source| CatalogError::PreviewDir {
            path: config.preview_root.clone(),
            source,
        })?;
    tracing::debug!(
        "Ensured preview directory exists: {}",
        config.preview_root.display()
    );

    // walkdir is synchronous — keep it off the async workers.
    let root = config.video_root.clone();
    let files = tokio::task::spawn_blocking(move || scanner::scan(&root)).await?;
    if files.is_empty() {
        return Err(CatalogError::Empty(config.video_root.clone()));
    }

    let files = dedupe_by_id(files);

    let mut tasks = JoinSet::new();
    for relative in files {
        let config = Arc::clone(&config);
        let prober = Arc::clone(&prober);
        tasks.spawn(async move { build_record(&relative, &config, prober.as_ref()).await });
    }

    let mut records = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        records.push(joined?);
    }

    records.sort_by(display_order);
    tracing::info!("Processed {} videos successfully", records.len());
    Ok(records)
}

/// Assemble one record for a discovered file. Infallible: every failure path
/// inside resolves to a fallback value, so one bad file never drops or
/// corrupts its siblings.
async fn build_record(relative: &str, config: &Config, prober: &dyn DurationProber) -> VideoRecord {
    let path = Path::new(relative);
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.to_string());
    let file_type = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let video_path = config.video_root.join(relative);
    let (companions, created) = tokio::join!(
        match_companions(&id, &config.preview_root, &config.thumbnails_prefix),
        created_at(&video_path),
    );
    let duration = prober.probe(&video_path).max(0.0);

    VideoRecord {
        url: format!("{}/{}.{}", config.videos_prefix, id, file_type),
        name: id.clone(),
        id,
        file_type,
        thumbnail: companions.thumbnail,
        preview: companions.preview,
        duration,
        created_at: created,
    }
}

/// Collapse files sharing a basename (`a.mp4` + `a.webm`) to one entry per
/// id. Precedence follows VIDEO_EXTENSIONS order, so `a.mp4` wins over
/// `a.webm`; the loser is logged and dropped. On equal rank (`clips/a.mp4`
/// and `other/a.mp4`) the first file the walk produced wins — deterministic
/// for an unchanged filesystem, since the walk order only changes when the
/// tree does.
fn dedupe_by_id(files: Vec<String>) -> Vec<String> {
    let mut by_id: HashMap<String, String> = HashMap::with_capacity(files.len());
    for file in files {
        let id = Path::new(&file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        match by_id.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(file);
            }
            Entry::Occupied(mut slot) => {
                if extension_rank(&file) < extension_rank(slot.get()) {
                    tracing::warn!("Duplicate video id: {} shadows {}", file, slot.get());
                    slot.insert(file);
                } else {
                    tracing::warn!("Duplicate video id: {} shadows {}", slot.get(), file);
                }
            }
        }
    }
    by_id.into_values().collect()
}

fn extension_rank(file: &str) -> usize {
    Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .and_then(|e| VIDEO_EXTENSIONS.iter().position(|known| *known == e))
        .unwrap_or(usize::MAX)
}
