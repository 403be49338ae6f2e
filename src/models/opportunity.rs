use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OpportunityStatus — Pipeline status as stored by the API
// ---------------------------------------------------------------------------

/// Status of an opportunity in the sales pipeline.
///
/// The API stores status as a free-form string. Known values map to named
/// variants; anything else is preserved verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum OpportunityStatus {
    New,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
    Other(String),
}

impl OpportunityStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
            Self::Other(s) => s,
        }
    }
}

impl Default for OpportunityStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for OpportunityStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => Self::New,
            "Qualified" => Self::Qualified,
            "Proposal" => Self::Proposal,
            "Negotiation" => Self::Negotiation,
            "Closed Won" => Self::ClosedWon,
            "Closed Lost" => Self::ClosedLost,
            _ => Self::Other(s),
        }
    }
}

impl From<Option<String>> for OpportunityStatus {
    fn from(s: Option<String>) -> Self {
        s.map(Self::from).unwrap_or_default()
    }
}

impl From<&str> for OpportunityStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<OpportunityStatus> for String {
    fn from(status: OpportunityStatus) -> Self {
        match status {
            OpportunityStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived open/won/lost classification. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    Open,
    Won,
    Lost,
}

// ---------------------------------------------------------------------------
// Opportunity — A potential sale tracked through the pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: OpportunityStatus,
    pub stage: Option<String>,
    pub amount: Option<Decimal>,
    /// ISO-8601 date (`YYYY-MM-DD`) as sent by the API.
    pub closing_date: Option<String>,
    pub probability: Option<Decimal>,
    pub notes: Option<String>,
    pub customer_id: Option<i64>,
}

impl Opportunity {
    /// Amount, treating a missing value as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Closing date parsed from the leading `YYYY-MM-DD` of `closing_date`.
    ///
    /// Returns `None` when the field is missing or does not start with a
    /// calendar date, so date-times such as `2024-03-15T00:00:00` still parse.
    pub fn closing_day(&self) -> Option<NaiveDate> {
        let raw = self.closing_date.as_deref()?.trim();
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Short English month name (`Jan`..`Dec`) of the closing date.
    pub fn closing_month(&self) -> Option<&'static str> {
        self.closing_day().map(|d| month_label(d.month()))
    }
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month name for a 1-based month number.
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS[((month.clamp(1, 12)) - 1) as usize]
}
