//! Customer queries against the `/customers` endpoints.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Customer;

// ---------------------------------------------------------------------------
// SearchCustomersParams
// ---------------------------------------------------------------------------

/// Parameters for the customer search endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct SearchCustomersParams {
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
}

impl SearchCustomersParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("companyName", &self.company_name),
            ("industry", &self.industry),
            ("status", &self.status),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.clone().map(|v| (k, v)))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// CustomerQuery
// ---------------------------------------------------------------------------

/// Query interface for CRM customers.
pub struct CustomerQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CustomerQuery<'a> {
    /// Create a new `CustomerQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every customer.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.conn.get_json(&[config::CUSTOMERS], &[]).await
    }

    /// Get a single customer by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Customer>> {
        self.conn
            .get_optional(&[config::CUSTOMERS, &id.to_string()])
            .await
    }

    /// Search customers by company name, industry and/or status.
    pub async fn search(&self, params: &SearchCustomersParams) -> Result<Vec<Customer>> {
        let query = params.to_query();
        self.conn
            .get_json(&[config::CUSTOMERS, "search"], &query)
            .await
    }

    pub async fn create(&self, customer: &Customer) -> Result<Customer> {
        self.conn
            .post_json(&[config::CUSTOMERS], &[], Some(customer))
            .await
    }

    pub async fn update(&self, id: i64, customer: &Customer) -> Result<Customer> {
        self.conn
            .put_json(&[config::CUSTOMERS, &id.to_string()], customer)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .delete(&[config::CUSTOMERS, &id.to_string()])
            .await
    }
}
