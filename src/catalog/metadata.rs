use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;
use std::time::SystemTime;

/// Pluggable duration extraction. The baseline server does not probe
/// container headers; a real prober can be swapped in without touching the
/// catalog orchestration.
pub trait DurationProber: Send + Sync {
    /// Duration of the clip at `path` in seconds; 0.0 when unknown.
    fn probe(&self, path: &Path) -> f64;
}

/// Baseline prober: always reports an unknown (zero) duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProber;

impl DurationProber for NoopProber {
    fn probe(&self, _path: &Path) -> f64 {
        0.0
    }
}

/// Filesystem creation time for `path` as an ISO-8601 UTC timestamp.
///
/// Falls back to modification time where birth time is unavailable (common on
/// Linux filesystems), and to the current wall clock when the file cannot be
/// statted at all — a metadata failure degrades one record's accuracy, it
/// never aborts catalog construction.
pub async fn created_at(path: &Path) -> String {
    let ts = match tokio::fs::metadata(path).await {
        Ok(meta) => meta
            .created()
            .or_else(|_| meta.modified())
            .unwrap_or_else(|_| SystemTime::now()),
        Err(e) => {
            tracing::warn!("Failed to get stats for {}: {}", path.display(), e);
            SystemTime::now()
        }
    };
    DateTime::<Utc>::from(ts).to_rfc3339_opts(SecondsFormat::Millis, true)
}
