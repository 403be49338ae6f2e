//! Client-side dashboard aggregation.
//!
//! [`DashboardLoader`] fetches the CRM collections through a
//! [`DashboardSource`] and reduces them to a
//! [`DashboardSummary`](crate::models::DashboardSummary) with
//! the functions in [`aggregate`].

pub mod aggregate;
pub mod loader;
pub mod source;

pub use aggregate::{
    classify, monthly_sales, placeholder_series, sales_series, summarize_opportunities, Snapshot,
};
pub use loader::DashboardLoader;
pub use source::DashboardSource;
