// Application state for HTTP handlers
use crate::application::snapshot_store::SnapshotStore;
use crate::application::solar_service::SolarService;
use std::sync::Arc;

/// Where handlers get their summaries from, chosen by the configured refresh mode
#[derive(Clone)]
pub enum SummarySource {
    OnDemand(SolarService),
    Background(Arc<SnapshotStore>),
}

#[derive(Clone)]
pub struct AppState {
    pub source: SummarySource,
}
