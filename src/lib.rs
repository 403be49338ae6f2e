//! Sales-CRM SDK for Rust.
//!
//! Provides a typed async client for the CRM REST API (customers, contacts,
//! opportunities, activities, products) and a client-side dashboard
//! aggregator that derives pipeline, win/loss and monthly sales figures from
//! the fetched collections.
//!
//! # Quick start
//!
//! ```no_run
//! use crm_dashboard_sdk::CrmSdk;
//!
//! # async fn example() -> crm_dashboard_sdk::Result<()> {
//! let sdk = CrmSdk::builder()
//!     .base_url("http://localhost:8080/api")
//!     .build()?;
//!
//! // Query entities
//! let customers = sdk.customers().list().await?;
//!
//! // Load the dashboard (never fails; degrades to a zero state instead)
//! let dashboard = sdk.load_dashboard().await;
//! println!("pipeline value: {}", dashboard.opportunity_summary.values.open);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
pub mod connection;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod queries;

#[cfg(feature = "blocking")]
pub use blocking::BlockingCrmSdk;
pub use connection::Connection;
pub use dashboard::{DashboardLoader, DashboardSource};
pub use error::{CrmError, Result};
pub use models::DashboardSummary;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CrmSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CrmSdk`] instance.
///
/// Use [`CrmSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CrmSdkBuilder::build) to create the SDK.
pub struct CrmSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for CrmSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl CrmSdkBuilder {
    /// Set the API base URL.
    ///
    /// If not set, `$CRM_API_URL` is used when present, otherwise
    /// `http://localhost:8080/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. The dashboard aggregator enforces no deadline
    /// of its own, so this also bounds each dashboard fetch.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK. No request is made until the first query.
    pub fn build(self) -> Result<CrmSdk> {
        let base_url = self.base_url.unwrap_or_else(config::default_api_url);
        let conn = Connection::new(&base_url, self.timeout)?;
        Ok(CrmSdk {
            dashboard: DashboardLoader::new(conn.clone()),
            conn,
        })
    }
}

// ---------------------------------------------------------------------------
// CrmSdk
// ---------------------------------------------------------------------------

/// The main entry point for the CRM SDK.
///
/// Wraps a [`Connection`] and exposes per-entity query interfaces as
/// lightweight borrowing wrappers, plus a [`DashboardLoader`] that remembers
/// the last dashboard it produced.
///
/// Created via [`CrmSdk::builder()`].
pub struct CrmSdk {
    conn: Connection,
    dashboard: DashboardLoader<Connection>,
}

impl CrmSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CrmSdkBuilder {
        CrmSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the customer query interface.
    pub fn customers(&self) -> queries::CustomerQuery<'_> {
        queries::CustomerQuery::new(&self.conn)
    }

    /// Access the contact query interface.
    pub fn contacts(&self) -> queries::ContactQuery<'_> {
        queries::ContactQuery::new(&self.conn)
    }

    /// Access the opportunity query interface.
    pub fn opportunities(&self) -> queries::OpportunityQuery<'_> {
        queries::OpportunityQuery::new(&self.conn)
    }

    /// Access the activity query interface.
    pub fn activities(&self) -> queries::ActivityQuery<'_> {
        queries::ActivityQuery::new(&self.conn)
    }

    /// Access the product query interface.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.conn)
    }

    // -- Dashboard ---------------------------------------------------------

    /// Fetch every collection and aggregate a fresh dashboard summary.
    ///
    /// Never fails: on any fetch error the summary falls back to the zero
    /// state with `degraded` set, and the error is logged.
    pub async fn load_dashboard(&self) -> DashboardSummary {
        self.dashboard.load().await
    }

    /// Access the server-computed dashboard summaries.
    pub fn server_dashboard(&self) -> queries::DashboardQuery<'_> {
        queries::DashboardQuery::new(&self.conn)
    }

    /// Opportunity summary built from the API's per-status endpoints.
    ///
    /// Unlike [`load_dashboard`](Self::load_dashboard), errors are returned.
    pub async fn server_opportunity_summary(&self) -> Result<models::OpportunitySummary> {
        self.server_dashboard().opportunity_summary().await
    }

    /// Recent and upcoming activities, fetched concurrently. Errors are returned.
    pub async fn server_activity_summary(&self) -> Result<models::ActivitySummary> {
        self.server_dashboard().activity_summary().await
    }

    /// The summary published by the most recent settled dashboard load.
    pub fn latest_dashboard(&self) -> Option<DashboardSummary> {
        self.dashboard.latest()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CrmSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CrmSdk(base_url={}, dashboard_loads={})",
            self.conn.base_url(),
            self.dashboard.generation()
        )
    }
}
