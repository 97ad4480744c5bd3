use crate::application::scheduler::{DEFAULT_LIVE_INTERVAL, DEFAULT_SITE_INTERVAL};
use crate::domain::credentials::Credentials;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://portal.solaranalytics.com.au/api";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// Every request fetches from the vendor before answering
    #[default]
    OnDemand,
    /// A background task keeps a snapshot fresh; requests never block on the vendor
    Background,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SolarConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub mode: RefreshMode,
    #[serde(default = "default_live_interval_secs")]
    pub live_interval_secs: u64,
    #[serde(default = "default_site_interval_secs")]
    pub site_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_live_interval_secs() -> u64 {
    DEFAULT_LIVE_INTERVAL.as_secs()
}

fn default_site_interval_secs() -> u64 {
    DEFAULT_SITE_INTERVAL.as_secs()
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl SolarConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.username.clone(),
            self.password.clone(),
            self.site_id.clone(),
        )
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.bind_addr.parse()?)
    }

    pub fn live_interval(&self) -> Duration {
        Duration::from_secs(self.live_interval_secs)
    }

    pub fn site_interval(&self) -> Duration {
        Duration::from_secs(self.site_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let missing: Vec<&str> = [
            ("SA_USERNAME", &self.username),
            ("SA_PASSWORD", &self.password),
            ("SA_SITE_ID", &self.site_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            anyhow::bail!("missing required settings: {}", missing.join(", "));
        }

        if self.live_interval_secs == 0 || self.site_interval_secs == 0 {
            anyhow::bail!("refresh intervals must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request timeout must be greater than zero");
        }
        self.socket_addr()?;

        Ok(())
    }
}

/// Load settings from `config/solar.*` (optional) overlaid with `SA_*` environment variables
pub fn load_solar_config() -> anyhow::Result<SolarConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/solar").required(false))
        .add_source(config::Environment::with_prefix("SA"));

    build_solar_config(builder)
}

fn build_solar_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<SolarConfig> {
    let config: SolarConfig = builder.build()?.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
