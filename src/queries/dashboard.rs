//! Dashboard summaries computed by the API's filtered endpoints.
//!
//! Unlike [`DashboardLoader`](crate::dashboard::DashboardLoader), which
//! downloads whole collections and aggregates locally, these queries ask the
//! API for per-status lists and totals. Errors are logged and returned.

use tracing::warn;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{
    ActivitySummary, OpportunityStatus, OpportunitySummary, StatusCounts, StatusValues,
};
use crate::queries::{ActivityQuery, OpportunityQuery};

/// Status the API uses for the whole open pipeline.
pub const OPEN_STATUS: &str = "Open";

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

/// Query interface for server-computed dashboard summaries.
pub struct DashboardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> DashboardQuery<'a> {
    /// Create a new `DashboardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Opportunity counts and values from the status endpoints.
    ///
    /// Issues five requests concurrently: the open, won and lost lists, and
    /// the open and won totals. `counts.total` is the sum of the three list
    /// lengths. Fails with the first error.
    pub async fn opportunity_summary(&self) -> Result<OpportunitySummary> {
        let q = OpportunityQuery::new(self.conn);
        let open = OpportunityStatus::from(OPEN_STATUS);
        let won = OpportunityStatus::ClosedWon;
        let lost = OpportunityStatus::ClosedLost;

        let fetched = tokio::try_join!(
            q.by_status(&open),
            q.by_status(&won),
            q.by_status(&lost),
            q.total_value_by_status(&open),
            q.total_value_by_status(&won),
        );
        let (open_list, won_list, lost_list, open_value, won_value) = match fetched {
            Ok(parts) => parts,
            Err(e) => {
                warn!(error = %e, "error fetching opportunity summary");
                return Err(e);
            }
        };

        Ok(OpportunitySummary {
            counts: StatusCounts {
                open: open_list.len(),
                won: won_list.len(),
                lost: lost_list.len(),
                total: open_list.len() + won_list.len() + lost_list.len(),
            },
            values: StatusValues {
                open: open_value,
                won: won_value,
            },
        })
    }

    /// Recent and upcoming activities, fetched concurrently.
    pub async fn activity_summary(&self) -> Result<ActivitySummary> {
        let q = ActivityQuery::new(self.conn);
        match tokio::try_join!(q.recent(), q.upcoming()) {
            Ok((recent, upcoming)) => Ok(ActivitySummary { recent, upcoming }),
            Err(e) => {
                warn!(error = %e, "error fetching activity summary");
                Err(e)
            }
        }
    }
}
