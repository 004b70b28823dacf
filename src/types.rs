//! Core types for archive-browser
//!
//! The value types that flow through the pipeline: the queried month, the
//! decoded article record with its wire wrappers, the unified fetch outcome,
//! the day-grouped display section, and the display-ready list state.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// English standalone month names, indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up the English name for a calendar month (1-12)
///
/// Returns `None` for out-of-range values so picker labels can fall back to
/// the bare number.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).wrapping_sub(1)).copied()
}

/// A (year, month) pair identifying one archive period
///
/// Immutable value; ordering is lexicographic on (year, month), which is what
/// [`MonthRange`](crate::MonthRange) clamps against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthInfo {
    /// Calendar year (e.g., 2017)
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
}

impl MonthInfo {
    /// Create a month from its year and 1-based month number
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Copy of this month with the year replaced
    #[must_use]
    pub const fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Copy of this month with the month number replaced
    #[must_use]
    pub const fn with_month(self, month: u32) -> Self {
        Self { month, ..self }
    }
}

impl fmt::Display for MonthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match month_name(self.month) {
            Some(name) => write!(f, "{} {}", name, self.year),
            None => write!(f, "{} {}", self.month, self.year),
        }
    }
}

/// Headline wrapper object as nested on the wire
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Main headline text
    pub main: String,
}

/// Byline wrapper object as nested on the wire
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byline {
    /// Original byline text (e.g., "By Jane Doe")
    pub original: String,
}

/// One archived article record
///
/// Every field is optional because the upstream schema is not strictly
/// guaranteed per record. The struct mirrors the wire nesting exactly
/// (snake_case keys, `headline`/`byline` wrapper objects) and re-serializes
/// with absent fields absent rather than `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Article abstract
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Headline wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<Headline>,

    /// Byline wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byline: Option<Byline>,

    /// Publication timestamp (ISO-8601 on the wire, normalized to UTC)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso8601_opt"
    )]
    pub pub_date: Option<DateTime<Utc>>,

    /// Short text snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Publishing source name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Canonical article URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<Url>,
}

/// Flexible ISO-8601 (de)serialization for optional timestamps
///
/// The archive API spells its offsets `+0000` (no colon), which strict
/// RFC 3339 parsing rejects, so deserialization tries RFC 3339 first and then
/// the colon-less offset form. Serialization always emits RFC 3339 UTC.
mod iso8601_opt {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// The unified success/failure result of one fetch-and-parse cycle
///
/// This is the single channel through which the network/parse stage
/// communicates with consumers; there are no partial or streaming results.
/// The error's `Display` output is the message a consuming screen shows.
pub type ArchiveOutcome = std::result::Result<Vec<Document>, Error>;

/// A display-ready grouping of documents sharing a UTC publication day
///
/// Derived and ephemeral: recomputed on every successful load, never
/// persisted. Produced by [`group`](crate::group) in ascending day order with
/// the unknown-day section (label `"?"`) first.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySection {
    /// Section header: the decimal day of month, or `"?"` for documents with
    /// no publication date
    pub label: String,
    /// Documents published on this day, in original input order
    pub documents: Vec<Document>,
}

/// Display state for an archive list screen
///
/// Collapses a fetch outcome into the four states a list view renders. The
/// consumer owns when to show [`ListState::Loading`]; the other three come
/// out of [`ListState::from_outcome`].
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    /// A fetch is in flight
    Loading,
    /// The month loaded successfully but contains no documents
    Empty,
    /// Day-grouped sections ready for display
    Data(Vec<DaySection>),
    /// The pipeline failed; the message is shown verbatim
    Error(String),
}

impl ListState {
    /// Collapse a fetch outcome into display state, grouping on success
    #[must_use]
    pub fn from_outcome(outcome: ArchiveOutcome) -> Self {
        match outcome {
            Ok(docs) if docs.is_empty() => ListState::Empty,
            Ok(docs) => ListState::Data(crate::grouper::group(docs)),
            Err(err) => ListState::Error(err.to_string()),
        }
    }
}
