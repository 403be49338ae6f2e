//! Opportunity queries against the `/opportunities` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Opportunity, OpportunityStatus};

// ---------------------------------------------------------------------------
// OpportunityQuery
// ---------------------------------------------------------------------------

/// Query interface for sales opportunities.
pub struct OpportunityQuery<'a> {
    conn: &'a Connection,
}

impl<'a> OpportunityQuery<'a> {
    /// Create a new `OpportunityQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every opportunity.
    pub async fn list(&self) -> Result<Vec<Opportunity>> {
        self.conn.get_json(&[config::OPPORTUNITIES], &[]).await
    }

    /// Get a single opportunity by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Opportunity>> {
        self.conn
            .get_optional(&[config::OPPORTUNITIES, &id.to_string()])
            .await
    }

    pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Opportunity>> {
        self.conn
            .get_json(
                &[config::OPPORTUNITIES, "customer", &customer_id.to_string()],
                &[],
            )
            .await
    }

    /// Opportunities with exactly this status (filtered by the API).
    pub async fn by_status(&self, status: &OpportunityStatus) -> Result<Vec<Opportunity>> {
        self.conn
            .get_json(&[config::OPPORTUNITIES, "status", status.as_str()], &[])
            .await
    }

    pub async fn by_stage(&self, stage: &str) -> Result<Vec<Opportunity>> {
        self.conn
            .get_json(&[config::OPPORTUNITIES, "stage", stage], &[])
            .await
    }

    /// Opportunities closing between `start` and `end`, inclusive.
    pub async fn by_closing_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Opportunity>> {
        let query = [("startDate", start.to_string()), ("endDate", end.to_string())];
        self.conn
            .get_json(&[config::OPPORTUNITIES, "closing-date-range"], &query)
            .await
    }

    /// Opportunities whose amount is at least `threshold`.
    pub async fn high_value(&self, threshold: Decimal) -> Result<Vec<Opportunity>> {
        self.conn
            .get_json(
                &[config::OPPORTUNITIES, "high-value"],
                &[("threshold", threshold.to_string())],
            )
            .await
    }

    /// Server-side sum of amounts for one status. A `null` body counts as zero.
    pub async fn total_value_by_status(&self, status: &OpportunityStatus) -> Result<Decimal> {
        let total: Option<Decimal> = self
            .conn
            .get_json(&[config::OPPORTUNITIES, "value", "status", status.as_str()], &[])
            .await?;
        Ok(total.unwrap_or(Decimal::ZERO))
    }

    pub async fn create(&self, opportunity: &Opportunity) -> Result<Opportunity> {
        self.conn
            .post_json(&[config::OPPORTUNITIES], &[], Some(opportunity))
            .await
    }

    pub async fn update(&self, id: i64, opportunity: &Opportunity) -> Result<Opportunity> {
        self.conn
            .put_json(&[config::OPPORTUNITIES, &id.to_string()], opportunity)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .delete(&[config::OPPORTUNITIES, &id.to_string()])
            .await
    }
}
