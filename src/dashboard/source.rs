//! Data-access seam between the dashboard aggregator and the CRM API.

use std::sync::Arc;

use async_trait::async_trait;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Activity, Contact, Customer, Opportunity, Product};
use crate::queries::{ActivityQuery, ContactQuery, CustomerQuery, OpportunityQuery, ProductQuery};

/// The read operations the dashboard needs.
///
/// Implemented over HTTP by [`Connection`]; tests and embedders can supply
/// their own implementation.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>>;
    async fn list_contacts(&self) -> Result<Vec<Contact>>;
    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>>;
    async fn list_activities(&self) -> Result<Vec<Activity>>;
    async fn list_upcoming_activities(&self) -> Result<Vec<Activity>>;
    async fn list_recent_activities(&self) -> Result<Vec<Activity>>;
}

#[async_trait]
impl DashboardSource for Connection {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        CustomerQuery::new(self).list().await
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        ContactQuery::new(self).list().await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        ProductQuery::new(self).list().await
    }

    async fn list_opportunities(&self) -> Result<Vec<Opportunity>> {
        OpportunityQuery::new(self).list().await
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        ActivityQuery::new(self).list().await
    }

    async fn list_upcoming_activities(&self) -> Result<Vec<Activity>> {
        ActivityQuery::new(self).upcoming().await
    }

    async fn list_recent_activities(&self) -> Result<Vec<Activity>> {
        ActivityQuery::new(self).recent().await
    }
}

#[async_trait]
impl<T: DashboardSource + ?Sized> DashboardSource for Arc<T> {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        (**self).list_customers().await
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        (**self).list_contacts().await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        (**self).list_products().await
    }

    async fn list_opportunities(&self) -> Result<Vec<Opportunity>> {
        (**self).list_opportunities().await
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        (**self).list_activities().await
    }

    async fn list_upcoming_activities(&self) -> Result<Vec<Activity>> {
        (**self).list_upcoming_activities().await
    }

    async fn list_recent_activities(&self) -> Result<Vec<Activity>> {
        (**self).list_recent_activities().await
    }
}
