use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "clipdex",
    about = "Video gallery catalog server — `clipdex /path/to/videos` and it works",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Directory tree containing .mp4/.webm video files [default: ./videos]
    #[arg(value_name = "VIDEO_DIR")]
    pub video_root: Option<PathBuf>,

    /// Flat directory holding companion thumbnails/previews and the defaults
    /// [default: ./thumbnails/preview]
    #[arg(long, value_name = "DIR")]
    pub previews: Option<PathBuf>,

    /// HTTP port to listen on [default: 3000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Allowed CORS origin for the catalog endpoint [default: *]
    #[arg(long, value_name = "ORIGIN")]
    pub cors_origin: Option<String>,

    /// Path to TOML config file (overrides default search: ./clipdex.toml, ~/.config/clipdex/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,
}
