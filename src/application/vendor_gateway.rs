// Port for the vendor API
use crate::domain::credentials::Credentials;
use crate::domain::energy::{LiveData, SiteData};
use crate::domain::token::TokenResponse;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait VendorGateway: Send + Sync {
    /// Exchange account credentials for a bearer token
    async fn issue_token(&self, credentials: &Credentials) -> Result<TokenResponse>;

    /// Most recent live readings for a site
    async fn live_site_data(&self, bearer: &str, site_id: &str) -> Result<LiveData>;

    /// Minute-granularity samples for a single calendar day
    async fn site_data(&self, bearer: &str, site_id: &str, day: NaiveDate) -> Result<SiteData>;
}
