//! Configuration types for archive-browser
//!
//! One explicit configuration struct, constructed at startup and handed to
//! the fetcher and the month-range logic, instead of ambient global state.
//! Everything except the API key has a sensible default.

use crate::error::{Error, Result};
use crate::month_range::MonthRange;
use crate::types::MonthInfo;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Top-level configuration for the archive client
///
/// The API key is the only required value; it is a secret and must be
/// non-empty, enforced by [`Config::validate`] before any fetcher is built.
/// The month bounds describe the selectable archive interval: a fixed
/// historical minimum and a maximum that, when unset, resolves to the current
/// UTC calendar month at run time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Archive API key (secret, required, no default)
    pub api_key: String,

    /// Earliest selectable archive month (default: January 1852)
    #[serde(default = "default_min_month")]
    pub min_month: MonthInfo,

    /// Latest selectable archive month (default: current UTC month at run
    /// time, resolved by [`Config::month_range`])
    #[serde(default)]
    pub max_month: Option<MonthInfo>,

    /// Base endpoint of the archive API
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with archive requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            min_month: default_min_month(),
            max_month: None,
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Create a configuration with the given API key and default everything
    /// else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key if:
    /// - the API key is empty or blank
    /// - a month bound has a month number outside 1-12
    /// - the bounds are inverted (`min_month` after `max_month`)
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config {
                message: "API key must not be empty".to_string(),
                key: Some("api_key".to_string()),
            });
        }

        if !(1..=12).contains(&self.min_month.month) {
            return Err(Error::Config {
                message: format!("month must be 1-12, got {}", self.min_month.month),
                key: Some("min_month".to_string()),
            });
        }

        if let Some(max) = self.max_month {
            if !(1..=12).contains(&max.month) {
                return Err(Error::Config {
                    message: format!("month must be 1-12, got {}", max.month),
                    key: Some("max_month".to_string()),
                });
            }
            if self.min_month > max {
                return Err(Error::Config {
                    message: format!("min_month {} is after max_month {}", self.min_month, max),
                    key: Some("max_month".to_string()),
                });
            }
        }

        Ok(())
    }

    /// Resolve the selectable month range
    ///
    /// An unset `max_month` resolves to the current UTC calendar month, so
    /// the range always extends to the newest month the archive can have.
    #[must_use]
    pub fn month_range(&self) -> MonthRange {
        let max = self.max_month.unwrap_or_else(current_month);
        MonthRange::new(self.min_month, max)
    }
}

/// Current calendar month on the fixed UTC calendar
fn current_month() -> MonthInfo {
    let now = Utc::now();
    MonthInfo::new(now.year(), now.month())
}

fn default_min_month() -> MonthInfo {
    MonthInfo::new(1852, 1)
}

// infallible: the literal is a valid absolute URL
#[allow(clippy::expect_used)]
fn default_endpoint() -> Url {
    Url::parse("https://api.nytimes.com/svc/archive/v1")
        .expect("default endpoint literal must parse")
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    "archive-browser".to_string()
}

/// Serialize `Duration` as whole seconds for config files
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
