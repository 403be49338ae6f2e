//! Pure dashboard aggregation over already-fetched collections.
//!
//! Nothing here performs I/O. [`DashboardSummary::aggregate`] turns a
//! [`Snapshot`] into the full summary; the individual steps are exposed so
//! they can be tested and reused on their own.

use rust_decimal::Decimal;

use crate::models::{
    Activity, ActivitySummary, Contact, Customer, DashboardSummary, EntityCounts, MonthlySales,
    Opportunity, OpportunityStatus, OpportunitySummary, Product, StatusBucket, StatusCounts,
    StatusValues,
};

/// Months used when no closed-won opportunity has a closing date, so a chart
/// always has at least one category.
const PLACEHOLDER_MONTHS: [&str; 3] = ["Jan", "Feb", "Mar"];

/// All collections fetched for one dashboard load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub contacts: Vec<Contact>,
    pub products: Vec<Product>,
    pub opportunities: Vec<Opportunity>,
    pub activities: Vec<Activity>,
    pub upcoming_activities: Vec<Activity>,
    pub recent_activities: Vec<Activity>,
}

/// Open/won/lost bucket of an opportunity status.
///
/// Only exact "Closed Won" and "Closed Lost" are terminal; every other
/// status, including an empty or unknown one, is open.
pub fn classify(status: &OpportunityStatus) -> StatusBucket {
    match status {
        OpportunityStatus::ClosedWon => StatusBucket::Won,
        OpportunityStatus::ClosedLost => StatusBucket::Lost,
        _ => StatusBucket::Open,
    }
}

/// Money sums saturate at [`Decimal::MAX`] instead of overflowing.
fn add_amount(sum: &mut Decimal, amount: Decimal) {
    *sum = sum.saturating_add(amount);
}

/// Count and value opportunities per status bucket.
///
/// Missing amounts count as zero. `counts.total` is the size of the input, so
/// `open + won + lost == total` always holds. Values saturate at
/// [`Decimal::MAX`].
pub fn summarize_opportunities(opportunities: &[Opportunity]) -> OpportunitySummary {
    let mut counts = StatusCounts {
        total: opportunities.len(),
        ..StatusCounts::default()
    };
    let mut values = StatusValues::default();

    for opp in opportunities {
        match classify(&opp.status) {
            StatusBucket::Open => {
                counts.open += 1;
                add_amount(&mut values.open, opp.amount_or_zero());
            }
            StatusBucket::Won => {
                counts.won += 1;
                add_amount(&mut values.won, opp.amount_or_zero());
            }
            StatusBucket::Lost => counts.lost += 1,
        }
    }

    OpportunitySummary { counts, values }
}

/// Closed-won amounts grouped by closing month name, in first-seen order.
///
/// Opportunities without a parseable closing date are skipped. The bucket key
/// is the month name alone, so the same month of different years merges.
pub fn monthly_sales(opportunities: &[Opportunity]) -> Vec<MonthlySales> {
    let mut series: Vec<MonthlySales> = Vec::new();

    for opp in opportunities
        .iter()
        .filter(|o| classify(&o.status) == StatusBucket::Won)
    {
        let Some(month) = opp.closing_month() else {
            continue;
        };
        match series.iter_mut().find(|m| m.month_label == month) {
            Some(bucket) => add_amount(&mut bucket.total_amount, opp.amount_or_zero()),
            None => series.push(MonthlySales::new(month, opp.amount_or_zero())),
        }
    }

    series
}

/// The fixed `Jan`/`Feb`/`Mar` zero series.
pub fn placeholder_series() -> Vec<MonthlySales> {
    PLACEHOLDER_MONTHS
        .iter()
        .map(|m| MonthlySales::new(*m, Decimal::ZERO))
        .collect()
}

/// [`monthly_sales`], falling back to [`placeholder_series`] when empty.
pub fn sales_series(opportunities: &[Opportunity]) -> Vec<MonthlySales> {
    let series = monthly_sales(opportunities);
    if series.is_empty() {
        placeholder_series()
    } else {
        series
    }
}

impl EntityCounts {
    pub fn of(snapshot: &Snapshot) -> Self {
        Self {
            customers: snapshot.customers.len(),
            contacts: snapshot.contacts.len(),
            opportunities: snapshot.opportunities.len(),
            activities: snapshot.activities.len(),
            products: snapshot.products.len(),
        }
    }
}

impl DashboardSummary {
    /// Derive the full summary from a successfully fetched snapshot.
    pub fn aggregate(snapshot: Snapshot) -> Self {
        let entity_counts = EntityCounts::of(&snapshot);
        let opportunity_summary = summarize_opportunities(&snapshot.opportunities);
        let sales_series = sales_series(&snapshot.opportunities);

        Self {
            entity_counts,
            opportunity_summary,
            activity_summary: ActivitySummary {
                recent: snapshot.recent_activities,
                upcoming: snapshot.upcoming_activities,
            },
            sales_series,
            degraded: false,
        }
    }

    /// Zero state used after a failed load.
    ///
    /// Opportunity and activity summaries are reset and the sales series is
    /// the placeholder, but `entity_counts` are kept from the previous summary.
    pub fn degraded(entity_counts: EntityCounts) -> Self {
        Self {
            entity_counts,
            opportunity_summary: OpportunitySummary::default(),
            activity_summary: ActivitySummary::default(),
            sales_series: placeholder_series(),
            degraded: true,
        }
    }
}
