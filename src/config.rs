use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VIDEO_ROOT: &str = "./videos";
const DEFAULT_PREVIEW_ROOT: &str = "./thumbnails/preview";
const DEFAULT_VIDEOS_PREFIX: &str = "/videos";
const DEFAULT_THUMBNAILS_PREFIX: &str = "/thumbnails/preview";
const DEFAULT_CORS_ORIGIN: &str = "*";

/// Optional values parsed from a TOML config file. Every field may be absent;
/// CLI flags override file values, which override the built-in defaults.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub video_root: Option<PathBuf>,
    pub preview_root: Option<PathBuf>,
    pub videos_prefix: Option<String>,
    pub thumbnails_prefix: Option<String>,
    pub cors_origin: Option<String>,
    pub localhost: Option<bool>,
}

/// Fully resolved process configuration. Read-only after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory tree scanned for playable video files.
    pub video_root: PathBuf,
    /// Flat directory expected to hold companion assets and the fixed defaults.
    pub preview_root: PathBuf,
    /// Public URL prefix under which video files are served, e.g. "/videos".
    pub videos_prefix: String,
    /// Public URL prefix under which companion assets are served.
    pub thumbnails_prefix: String,
    /// Value for Access-Control-Allow-Origin on catalog responses.
    pub cors_origin: String,
    pub localhost: bool,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            video_root: args
                .video_root
                .clone()
                .or(file.video_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VIDEO_ROOT)),
            preview_root: args
                .previews
                .clone()
                .or(file.preview_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREVIEW_ROOT)),
            videos_prefix: file
                .videos_prefix
                .unwrap_or_else(|| DEFAULT_VIDEOS_PREFIX.to_string()),
            thumbnails_prefix: file
                .thumbnails_prefix
                .unwrap_or_else(|| DEFAULT_THUMBNAILS_PREFIX.to_string()),
            cors_origin: args
                .cors_origin
                .clone()
                .or(file.cors_origin)
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("clipdex.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("clipdex").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
