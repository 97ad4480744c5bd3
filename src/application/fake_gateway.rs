// In-memory vendor used by application and presentation tests
use crate::application::vendor_gateway::VendorGateway;
use crate::domain::credentials::Credentials;
use crate::domain::energy::{LiveData, LiveReading, Sample, SiteData};
use crate::domain::token::TokenResponse;
use crate::error::{Result, SolarError};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct FakeGateway {
    pub token_calls: AtomicUsize,
    pub live_calls: AtomicUsize,
    pub site_calls: AtomicUsize,
    pub fail_token: AtomicBool,
    pub fail_data: AtomicBool,
    pub token_ttl: Mutex<Option<Duration>>,
    pub token_delay: Option<std::time::Duration>,
    pub live: LiveData,
    pub site: SiteData,
    pub bearers: Mutex<Vec<String>>,
    pub days: Mutex<Vec<NaiveDate>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            token_calls: AtomicUsize::new(0),
            live_calls: AtomicUsize::new(0),
            site_calls: AtomicUsize::new(0),
            fail_token: AtomicBool::new(false),
            fail_data: AtomicBool::new(false),
            token_ttl: Mutex::new(Some(Duration::hours(1))),
            token_delay: None,
            live: LiveData {
                available: true,
                data: vec![
                    LiveReading { generated: 1.0, consumed: 2.0 },
                    LiveReading { generated: 4.5, consumed: 1.5 },
                ],
            },
            site: SiteData::default(),
            bearers: Mutex::new(Vec::new()),
            days: Mutex::new(Vec::new()),
        }
    }

    pub fn with_samples(mut self, samples: Vec<Sample>) -> Self {
        self.site = SiteData {
            available: true,
            data: samples,
        };
        self
    }

    /// `None` makes the gateway hand out tokens with an unparsable expiry
    pub fn set_token_ttl(&self, ttl: Option<Duration>) {
        *self.token_ttl.lock().unwrap() = ttl;
    }

    pub fn token_count(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn live_count(&self) -> usize {
        self.live_calls.load(Ordering::SeqCst)
    }

    pub fn site_count(&self) -> usize {
        self.site_calls.load(Ordering::SeqCst)
    }

    fn check_data(&self, bearer: &str) -> Result<()> {
        self.bearers.lock().unwrap().push(bearer.to_string());
        if self.fail_data.load(Ordering::SeqCst) {
            return Err(SolarError::Status {
                endpoint: "fake",
                status: 502,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VendorGateway for FakeGateway {
    async fn issue_token(&self, _credentials: &Credentials) -> Result<TokenResponse> {
        let n = self.token_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.token_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_token.load(Ordering::SeqCst) {
            return Err(SolarError::Credential(401));
        }

        let ttl = *self.token_ttl.lock().unwrap();
        let expires = match ttl {
            Some(ttl) => (Utc::now() + ttl).to_rfc3339(),
            None => "soon".to_string(),
        };
        Ok(TokenResponse {
            expires: Some(expires),
            token: format!("token-{}", n),
            duration: 3600,
        })
    }

    async fn live_site_data(&self, bearer: &str, _site_id: &str) -> Result<LiveData> {
        self.live_calls.fetch_add(1, Ordering::SeqCst);
        self.check_data(bearer)?;
        Ok(self.live.clone())
    }

    async fn site_data(&self, bearer: &str, _site_id: &str, day: NaiveDate) -> Result<SiteData> {
        self.site_calls.fetch_add(1, Ordering::SeqCst);
        self.days.lock().unwrap().push(day);
        self.check_data(bearer)?;
        Ok(self.site.clone())
    }
}
