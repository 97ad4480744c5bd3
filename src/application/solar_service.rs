// Solar service - Fetches vendor data and turns it into summaries
use crate::application::token_manager::TokenManager;
use crate::application::vendor_gateway::VendorGateway;
use crate::domain::summary::{summarize, DailySummary, LiveSummary};
use crate::error::{Result, SolarError};
use chrono::{DateTime, Local};
use std::sync::Arc;

#[derive(Clone)]
pub struct SolarService {
    gateway: Arc<dyn VendorGateway>,
    tokens: Arc<TokenManager>,
}

impl SolarService {
    pub fn new(gateway: Arc<dyn VendorGateway>, tokens: Arc<TokenManager>) -> Self {
        Self { gateway, tokens }
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens
            .ensure_valid()
            .await
            .map_err(|e| SolarError::Token(Box::new(e)))
    }

    fn site_id(&self) -> &str {
        &self.tokens.credentials().site_id
    }

    pub async fn live_summary(&self) -> Result<LiveSummary> {
        let bearer = self.bearer().await?;
        let live = self.gateway.live_site_data(&bearer, self.site_id()).await?;
        if !live.available {
            tracing::debug!("Vendor flagged live data as unavailable");
        }
        Ok(LiveSummary::from_live_data(&live))
    }

    pub async fn site_summary(&self) -> Result<DailySummary> {
        self.site_summary_at(Local::now()).await
    }

    /// The day is taken from `now` on every call so a fetch just after
    /// midnight asks for the new day.
    async fn site_summary_at(&self, now: DateTime<Local>) -> Result<DailySummary> {
        let bearer = self.bearer().await?;
        let today = now.date_naive();
        let site = self.gateway.site_data(&bearer, self.site_id(), today).await?;
        if !site.available {
            tracing::debug!("Vendor flagged site data as unavailable");
        }

        let day_start = today
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
            .unwrap_or(now);
        Ok(summarize(&site.data, &day_start).with_availability(true))
    }
}
