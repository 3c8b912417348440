//! Video catalog server — scan a directory tree of clips, match companion
//! thumbnails and previews by naming convention, and serve a sorted JSON
//! catalog over HTTP.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod http;
