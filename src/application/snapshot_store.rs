// Snapshot store - Latest summaries shared between the scheduler and handlers
use crate::domain::summary::{DailySummary, LiveSummary};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct SnapshotStore {
    live: RwLock<LiveSummary>,
    site: RwLock<DailySummary>,
}

impl SnapshotStore {
    /// Both snapshots start unavailable until the first refresh lands
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn live(&self) -> LiveSummary {
        self.live.read().await.clone()
    }

    pub async fn site(&self) -> DailySummary {
        self.site.read().await.clone()
    }

    pub async fn set_live(&self, summary: LiveSummary) {
        *self.live.write().await = summary;
    }

    pub async fn set_site(&self, summary: DailySummary) {
        *self.site.write().await = summary;
    }
}
