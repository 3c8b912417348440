use serde::Serialize;
use std::cmp::Ordering;

/// A single catalog entry, built fresh from filesystem state on every request
/// and never persisted.
///
/// `id`/`url`/`thumbnail`/`preview` are always non-empty — absence of real
/// data is replaced by a well-defined fallback before a record is produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// File basename without extension; join key to companion assets.
    pub id: String,
    /// Display label. Equals `id`.
    pub name: String,
    /// Public playback path: `<videos_prefix>/<id>.<ext>`.
    pub url: String,
    /// Lower-cased extension without the dot.
    pub file_type: String,
    /// Public path to a still image — matched companion or the fixed default.
    pub thumbnail: String,
    /// Public path to an animated clip — matched companion or the fixed default.
    pub preview: String,
    /// Seconds, non-negative. Zero when unknown.
    pub duration: f64,
    /// ISO-8601 timestamp: filesystem creation time, or now if unavailable.
    pub created_at: String,
}

/// Catalog ordering: case-insensitive by display name, byte order as the
/// tiebreak so re-runs over unchanged state are stable.
pub fn display_order(a: &VideoRecord, b: &VideoRecord) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
