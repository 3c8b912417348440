use std::sync::Arc;

use crate::catalog::metadata::DurationProber;
use crate::config::Config;

/// Shared application state injected into route handlers via axum's State.
/// Read-only for the server lifetime; catalogs are rebuilt from current
/// filesystem state on every request, so concurrent requests share nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub prober: Arc<dyn DurationProber>,
}
