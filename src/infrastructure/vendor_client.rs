// Solar Analytics HTTP client
use crate::application::vendor_gateway::VendorGateway;
use crate::domain::credentials::Credentials;
use crate::domain::energy::{LiveData, SiteData};
use crate::domain::token::TokenResponse;
use crate::error::{Result, SolarError};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DAY_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone)]
pub struct VendorClient {
    base_url: String,
    client: reqwest::Client,
}

impl VendorClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn live_url(&self) -> String {
        format!("{}/v3/live_site_data", self.base_url)
    }

    fn site_url(&self, site_id: &str) -> String {
        format!("{}/v2/site_data/{}", self.base_url, urlencoding::encode(site_id))
    }

    /// Send a request and decode its JSON body into `T`
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(endpoint, %status, "Vendor request rejected");
            return Err(SolarError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl VendorGateway for VendorClient {
    async fn issue_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let request = self
            .client
            .get(format!("{}/v3/token", self.base_url))
            .basic_auth(&credentials.username, Some(&credentials.password));

        self.fetch("token", request).await.map_err(|e| match e {
            SolarError::Status { status, .. } => SolarError::Credential(status),
            other => other,
        })
    }

    async fn live_site_data(&self, bearer: &str, site_id: &str) -> Result<LiveData> {
        let request = self
            .client
            .get(self.live_url())
            .bearer_auth(bearer)
            .query(&[("site_id", site_id), ("last_six", "true")]);

        self.fetch("live_site_data", request).await
    }

    async fn site_data(&self, bearer: &str, site_id: &str, day: NaiveDate) -> Result<SiteData> {
        let day = day.format(DAY_FORMAT).to_string();
        let request = self
            .client
            .get(self.site_url(site_id))
            .bearer_auth(bearer)
            .query(&[
                ("tstart", day.as_str()),
                ("tend", day.as_str()),
                ("all", "true"),
                ("gran", "minute"),
                ("trunc", "false"),
            ]);

        self.fetch("site_data", request).await
    }
}
