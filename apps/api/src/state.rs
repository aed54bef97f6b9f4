use std::sync::Arc;

use crate::admin::visits::VisitCounter;
use crate::config::Config;
use crate::users::store::UserStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable persistence provider. Default: `PgUserStore`.
    pub users: Arc<dyn UserStore>,
    pub visits: Arc<VisitCounter>,
}

impl AppState {
    pub fn new(config: Config, users: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            users,
            visits: Arc::new(VisitCounter::default()),
        }
    }
}
