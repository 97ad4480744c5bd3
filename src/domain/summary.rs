// Summaries exposed over HTTP and the daily aggregation
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::Serialize;

use super::energy::{LiveData, Sample};

/// Vendor timestamp layout, interpreted in the site's local time
pub const SAMPLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveSummary {
    pub available: bool,
    pub generated: f64,
    pub consumed: f64,
}

impl LiveSummary {
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Only the most recent reading is meaningful
    pub fn from_live_data(live: &LiveData) -> Self {
        let latest = live.data.last().cloned().unwrap_or_default();
        Self {
            available: true,
            generated: latest.generated,
            consumed: latest.consumed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub available: bool,
    pub generated: f64,
    pub consumed: f64,
    pub imported: f64,
    pub exported: f64,
    pub hot_water: f64,
    pub ac1: f64,
    pub ac2: f64,
    pub stove: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl DailySummary {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    fn add(&mut self, sample: &Sample) {
        self.generated += sample.generated;
        self.consumed += sample.consumed;

        if sample.consumed > sample.generated {
            if sample.generated > 0.0 {
                self.imported += sample.consumed - sample.generated;
            } else {
                self.imported += sample.consumed;
            }
        } else {
            self.exported += sample.generated - sample.consumed;
        }

        self.hot_water += sample.hot_water;
        self.ac1 += sample.ac1;
        self.ac2 += sample.ac2;
        self.stove += sample.stove;
    }
}

/// Reduce the day's samples into a single summary.
///
/// Samples are interpreted in `day_start`'s timezone; anything unparsable or
/// earlier than `day_start` is skipped. Import and export are split per sample
/// because generation can cross consumption several times a day.
/// The result is not marked available; the caller decides that.
pub fn summarize<Tz: TimeZone>(samples: &[Sample], day_start: &DateTime<Tz>) -> DailySummary {
    let tz = day_start.timezone();
    let mut summary = DailySummary {
        timestamp: Some(day_start.fixed_offset()),
        ..DailySummary::default()
    };

    for sample in samples {
        let local = NaiveDateTime::parse_from_str(&sample.timestamp, SAMPLE_TIMESTAMP_FORMAT)
            .ok()
            .and_then(|naive| tz.from_local_datetime(&naive).earliest());

        match local {
            Some(ts) if ts >= *day_start => summary.add(sample),
            _ => {
                tracing::debug!("Skipping sample with timestamp {:?}", sample.timestamp);
            }
        }
    }

    summary
}
