//! Shared test fixtures for the CRM SDK integration tests.
//!
//! Provides sample entity data, an in-memory [`StubSource`] with per-call
//! failure injection and delays, and `mount_crm_api()` which serves the
//! sample data from a `wiremock` server.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use crm_dashboard_sdk::error::{CrmError, Result};
use crm_dashboard_sdk::models::{Activity, Contact, Customer, Opportunity, Product};
use crm_dashboard_sdk::DashboardSource;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn customers_json() -> Value {
    json!([
        {"id": 1, "companyName": "Acme Inc.", "industry": "Manufacturing", "status": "Active"},
        {"id": 2, "companyName": "XYZ Corp", "industry": "Finance", "status": "Prospect"}
    ])
}

pub fn contacts_json() -> Value {
    json!([
        {"id": 10, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@acme.test", "isPrimary": true, "customerId": 1},
        {"id": 11, "firstName": "Alan", "lastName": "Turing", "email": "alan@xyz.test", "isPrimary": false, "customerId": 2},
        {"id": 12, "firstName": "Grace", "email": "grace@xyz.test", "customerId": 2}
    ])
}

pub fn products_json() -> Value {
    json!([
        {"id": 100, "code": "LIC-STD", "name": "Standard License", "category": "Software", "price": 499.00, "status": "Active"}
    ])
}

/// Scenario A: two closed-won deals in March and one new deal.
pub fn opportunities_json() -> Value {
    json!([
        {"id": 1000, "name": "Software License Deal", "status": "Closed Won", "amount": 1000, "closingDate": "2024-03-15"},
        {"id": 1001, "name": "Consulting Services", "status": "Closed Won", "amount": 500, "closingDate": "2024-03-20"},
        {"id": 1002, "name": "Hardware Upgrade", "status": "New", "amount": 200}
    ])
}

pub fn activities_json() -> Value {
    json!([
        {"id": 500, "subject": "Kickoff call", "type": "Call", "status": "Completed", "scheduledDate": "2024-03-01T10:00:00"},
        {"id": 501, "subject": "Contract review", "type": "Meeting", "status": "Planned", "scheduledDate": "2030-01-15T14:00:00"}
    ])
}

pub fn upcoming_json() -> Value {
    json!([
        {"id": 501, "subject": "Contract review", "type": "Meeting", "status": "Planned", "scheduledDate": "2030-01-15T14:00:00"}
    ])
}

pub fn recent_json() -> Value {
    json!([
        {"id": 500, "subject": "Kickoff call", "type": "Call", "status": "Completed", "scheduledDate": "2024-03-01T10:00:00"}
    ])
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
    serde_json::from_value(value).unwrap()
}

/// Build an opportunity with the given status, amount and closing date.
pub fn opp(status: &str, amount: Option<i64>, closing_date: Option<&str>) -> Opportunity {
    Opportunity {
        status: status.into(),
        amount: amount.map(Into::into),
        closing_date: closing_date.map(str::to_string),
        ..Opportunity::default()
    }
}

// ---------------------------------------------------------------------------
// StubSource
// ---------------------------------------------------------------------------

/// The seven dashboard reads, used to target failures and delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Customers,
    Contacts,
    Products,
    Opportunities,
    Activities,
    Upcoming,
    Recent,
}

/// In-memory [`DashboardSource`] with failure injection and call counting.
pub struct StubSource {
    pub customers: Vec<Customer>,
    pub contacts: Vec<Contact>,
    pub products: Vec<Product>,
    pub opportunities: Mutex<Vec<Opportunity>>,
    pub activities: Vec<Activity>,
    pub upcoming: Vec<Activity>,
    pub recent: Vec<Activity>,
    failing: Mutex<HashSet<Call>>,
    delays: HashMap<Call, Duration>,
    calls: Mutex<HashMap<Call, usize>>,
}

impl StubSource {
    /// Stub serving the sample data above.
    pub fn sample() -> Self {
        Self {
            customers: decode(customers_json()),
            contacts: decode(contacts_json()),
            products: decode(products_json()),
            opportunities: Mutex::new(decode(opportunities_json())),
            activities: decode(activities_json()),
            upcoming: decode(upcoming_json()),
            recent: decode(recent_json()),
            failing: Mutex::new(HashSet::new()),
            delays: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Stub where every collection is empty.
    pub fn empty() -> Self {
        let stub = Self::sample();
        Self {
            customers: Vec::new(),
            contacts: Vec::new(),
            products: Vec::new(),
            opportunities: Mutex::new(Vec::new()),
            activities: Vec::new(),
            upcoming: Vec::new(),
            recent: Vec::new(),
            ..stub
        }
    }

    pub fn failing(self, call: Call) -> Self {
        self.set_failing(call, true);
        self
    }

    pub fn delayed(mut self, call: Call, delay: Duration) -> Self {
        self.delays.insert(call, delay);
        self
    }

    pub fn set_failing(&self, call: Call, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        if failing {
            set.insert(call);
        } else {
            set.remove(&call);
        }
    }

    pub fn set_opportunities(&self, opportunities: Vec<Opportunity>) {
        *self.opportunities.lock().unwrap() = opportunities;
    }

    /// How many times `call` was invoked.
    pub fn calls(&self, call: Call) -> usize {
        self.calls.lock().unwrap().get(&call).copied().unwrap_or(0)
    }

    async fn enter(&self, call: Call) -> Result<()> {
        *self.calls.lock().unwrap().entry(call).or_insert(0) += 1;
        if let Some(delay) = self.delays.get(&call) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.lock().unwrap().contains(&call) {
            return Err(CrmError::Status {
                status: 503,
                url: format!("stub://{:?}", call),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardSource for StubSource {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.enter(Call::Customers).await?;
        Ok(self.customers.clone())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.enter(Call::Contacts).await?;
        Ok(self.contacts.clone())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.enter(Call::Products).await?;
        Ok(self.products.clone())
    }

    async fn list_opportunities(&self) -> Result<Vec<Opportunity>> {
        self.enter(Call::Opportunities).await?;
        Ok(self.opportunities.lock().unwrap().clone())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.enter(Call::Activities).await?;
        Ok(self.activities.clone())
    }

    async fn list_upcoming_activities(&self) -> Result<Vec<Activity>> {
        self.enter(Call::Upcoming).await?;
        Ok(self.upcoming.clone())
    }

    async fn list_recent_activities(&self) -> Result<Vec<Activity>> {
        self.enter(Call::Recent).await?;
        Ok(self.recent.clone())
    }
}

// ---------------------------------------------------------------------------
// Mock HTTP API
// ---------------------------------------------------------------------------

/// Serve the sample data for the seven dashboard endpoints, except those
/// listed in `failing`, which answer 500.
pub async fn mount_crm_api(server: &MockServer, failing: &[&str]) {
    let routes = [
        ("/api/customers", customers_json()),
        ("/api/contacts", contacts_json()),
        ("/api/products", products_json()),
        ("/api/opportunities", opportunities_json()),
        ("/api/activities", activities_json()),
        ("/api/activities/upcoming", upcoming_json()),
        ("/api/activities/recent", recent_json()),
    ];
    for (route, body) in routes {
        let response = if failing.contains(&route) {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200).set_body_json(body)
        };
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

/// API base URL of a mock server.
pub fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}
