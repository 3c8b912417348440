use std::path::Path;

use crate::catalog::resolve::resolve;

/// Fixed fallback assets, always assumed present in the preview root.
pub const DEFAULT_THUMBNAIL: &str = "default.jpg";
pub const DEFAULT_PREVIEW: &str = "default.webm";

/// Public paths for a record's still image and animated preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companions {
    pub thumbnail: String,
    pub preview: String,
}

/// Look up the companion assets for `video_id` in `preview_root`:
/// `<id>.webm` (animated preview) and `<id>_thumb.jpg` (still thumbnail).
///
/// Promotion is all-or-nothing — if either file is missing, both fields fall
/// back to the shared defaults so a gallery never shows a thumbnail without
/// its matching preview or vice versa.
pub async fn match_companions(
    video_id: &str,
    preview_root: &Path,
    thumbnails_prefix: &str,
) -> Companions {
    let preview_name = format!("{video_id}.webm");
    let thumb_name = format!("{video_id}_thumb.jpg");

    let (preview_path, thumb_path) = tokio::join!(
        resolve(&preview_name, preview_root),
        resolve(&thumb_name, preview_root),
    );

    if preview_path.is_some() && thumb_path.is_some() {
        tracing::debug!("Companions matched for {}", video_id);
        Companions {
            thumbnail: format!("{thumbnails_prefix}/{thumb_name}"),
            preview: format!("{thumbnails_prefix}/{preview_name}"),
        }
    } else {
        tracing::warn!(
            "No WebM preview or thumbnail found for {}, using defaults",
            video_id
        );
        Companions {
            thumbnail: format!("{thumbnails_prefix}/{DEFAULT_THUMBNAIL}"),
            preview: format!("{thumbnails_prefix}/{DEFAULT_PREVIEW}"),
        }
    }
}
