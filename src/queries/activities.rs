//! Activity queries against the `/activities` endpoints.
//!
//! `recent` and `upcoming` are filtered by the API: upcoming activities are
//! scheduled in the future and not yet completed, recent ones are the most
//! recently created or updated.

use chrono::NaiveDateTime;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Activity;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ---------------------------------------------------------------------------
// ActivityQuery
// ---------------------------------------------------------------------------

/// Query interface for CRM activities (calls, meetings, tasks, ...).
pub struct ActivityQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ActivityQuery<'a> {
    /// Create a new `ActivityQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every activity.
    pub async fn list(&self) -> Result<Vec<Activity>> {
        self.conn.get_json(&[config::ACTIVITIES], &[]).await
    }

    /// Get a single activity by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Activity>> {
        self.conn
            .get_optional(&[config::ACTIVITIES, &id.to_string()])
            .await
    }

    pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Activity>> {
        self.related("customer", customer_id).await
    }

    pub async fn by_contact(&self, contact_id: i64) -> Result<Vec<Activity>> {
        self.related("contact", contact_id).await
    }

    pub async fn by_opportunity(&self, opportunity_id: i64) -> Result<Vec<Activity>> {
        self.related("opportunity", opportunity_id).await
    }

    pub async fn by_type(&self, activity_type: &str) -> Result<Vec<Activity>> {
        self.conn
            .get_json(&[config::ACTIVITIES, "type", activity_type], &[])
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Activity>> {
        self.conn
            .get_json(&[config::ACTIVITIES, "status", status], &[])
            .await
    }

    /// Activities scheduled between `start` and `end`.
    pub async fn by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Activity>> {
        let query = [
            ("startDate", start.format(DATE_TIME_FORMAT).to_string()),
            ("endDate", end.format(DATE_TIME_FORMAT).to_string()),
        ];
        self.conn
            .get_json(&[config::ACTIVITIES, "date-range"], &query)
            .await
    }

    /// The most recently created or updated activities.
    pub async fn recent(&self) -> Result<Vec<Activity>> {
        self.conn.get_json(&[config::ACTIVITIES, "recent"], &[]).await
    }

    /// Activities scheduled in the future that are not yet completed.
    pub async fn upcoming(&self) -> Result<Vec<Activity>> {
        self.conn
            .get_json(&[config::ACTIVITIES, "upcoming"], &[])
            .await
    }

    pub async fn create(&self, activity: &Activity) -> Result<Activity> {
        self.conn
            .post_json(&[config::ACTIVITIES], &[], Some(activity))
            .await
    }

    pub async fn update(&self, id: i64, activity: &Activity) -> Result<Activity> {
        self.conn
            .put_json(&[config::ACTIVITIES, &id.to_string()], activity)
            .await
    }

    /// Mark an activity as completed.
    pub async fn complete(&self, id: i64) -> Result<Activity> {
        self.conn
            .post_json(
                &[config::ACTIVITIES, &id.to_string(), "complete"],
                &[],
                None::<&()>,
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .delete(&[config::ACTIVITIES, &id.to_string()])
            .await
    }

    async fn related(&self, kind: &str, id: i64) -> Result<Vec<Activity>> {
        self.conn
            .get_json(&[config::ACTIVITIES, kind, &id.to_string()], &[])
            .await
    }
}
