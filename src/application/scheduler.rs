// Scheduler - Background refresh of the snapshot store
use crate::application::snapshot_store::SnapshotStore;
use crate::application::solar_service::SolarService;
use crate::domain::summary::{DailySummary, LiveSummary};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{interval, MissedTickBehavior};

pub const DEFAULT_LIVE_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_SITE_INTERVAL: Duration = Duration::from_secs(60);

pub struct Scheduler {
    service: SolarService,
    store: Arc<SnapshotStore>,
    live_every: Duration,
    site_every: Duration,
}

impl Scheduler {
    pub fn new(
        service: SolarService,
        store: Arc<SnapshotStore>,
        live_every: Duration,
        site_every: Duration,
    ) -> Self {
        Self {
            service,
            store,
            live_every,
            site_every,
        }
    }

    /// Drive both refresh timers until a shutdown message arrives.
    ///
    /// Both timers fire immediately on start. A failed refresh stores an
    /// unavailable snapshot and waits for the next tick.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut live_tick = interval(self.live_every);
        let mut site_tick = interval(self.site_every);
        live_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        site_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            live_every = ?self.live_every,
            site_every = ?self.site_every,
            "Background refresh started"
        );

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Background refresh stopping");
                    break;
                }
                _ = live_tick.tick() => self.refresh_live().await,
                _ = site_tick.tick() => self.refresh_site().await,
            }
        }
    }

    async fn refresh_live(&self) {
        let summary = match self.service.live_summary().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Failed to update live data: {}", e);
                LiveSummary::unavailable()
            }
        };
        self.store.set_live(summary).await;
    }

    async fn refresh_site(&self) {
        let summary = match self.service.site_summary().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Failed to update site data: {}", e);
                DailySummary::unavailable()
            }
        };
        self.store.set_site(summary).await;
    }
}
