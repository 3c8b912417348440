//! The media indexing engine: discovery, companion matching, metadata
//! extraction, and catalog assembly.

pub mod builder;
pub mod companion;
pub mod metadata;
pub mod record;
pub mod resolve;
pub mod scanner;
