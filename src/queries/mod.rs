//! Query modules for the CRM SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes async methods
//! returning `Result<T>` with typed [`models`](crate::models) payloads.

pub mod activities;
pub mod contacts;
pub mod customers;
pub mod dashboard;
pub mod opportunities;
pub mod products;

pub use activities::ActivityQuery;
pub use contacts::ContactQuery;
pub use customers::{CustomerQuery, SearchCustomersParams};
pub use dashboard::DashboardQuery;
pub use opportunities::OpportunityQuery;
pub use products::ProductQuery;
