use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::activity::Activity;

// ---------------------------------------------------------------------------
// EntityCounts — Collection sizes at fetch time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub customers: usize,
    pub contacts: usize,
    pub opportunities: usize,
    pub activities: usize,
    pub products: usize,
}

// ---------------------------------------------------------------------------
// OpportunitySummary — Open/won/lost breakdown of the pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub open: usize,
    pub won: usize,
    pub lost: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusValues {
    /// Pipeline value: sum of open opportunity amounts.
    pub open: Decimal,
    pub won: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitySummary {
    pub counts: StatusCounts,
    pub values: StatusValues,
}

// ---------------------------------------------------------------------------
// ActivitySummary — Recent and upcoming activity lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub recent: Vec<Activity>,
    pub upcoming: Vec<Activity>,
}

// ---------------------------------------------------------------------------
// MonthlySales — One point of the closed-won sales series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    pub month_label: String,
    pub total_amount: Decimal,
}

impl MonthlySales {
    pub fn new(month_label: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            month_label: month_label.into(),
            total_amount,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardSummary — Everything the dashboard renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub entity_counts: EntityCounts,
    pub opportunity_summary: OpportunitySummary,
    pub activity_summary: ActivitySummary,
    pub sales_series: Vec<MonthlySales>,
    /// Set when a fetch failed and the summary fell back to the zero state.
    #[serde(default)]
    pub degraded: bool,
}
