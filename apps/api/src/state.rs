use std::sync::Arc;

use crate::config::Config;
use crate::latency::Latency;
use crate::store::Store;
use crate::timetable::clash::{ClashChecker, RandomClashChecker};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
    pub latency: Latency,
    /// Pluggable clash checker. Default: RandomClashChecker.
    pub clash_checker: Arc<dyn ClashChecker>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(Store::seeded()),
            latency: Latency::new(config.latency_scale),
            clash_checker: Arc::new(RandomClashChecker::new(config.clash_threshold)),
            config,
        }
    }
}
