//! Contact queries against the `/contacts` endpoints.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Contact;

// ---------------------------------------------------------------------------
// ContactQuery
// ---------------------------------------------------------------------------

/// Query interface for contacts (people at customer companies).
pub struct ContactQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ContactQuery<'a> {
    /// Create a new `ContactQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every contact.
    pub async fn list(&self) -> Result<Vec<Contact>> {
        self.conn.get_json(&[config::CONTACTS], &[]).await
    }

    /// Get a single contact by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Contact>> {
        self.conn
            .get_optional(&[config::CONTACTS, &id.to_string()])
            .await
    }

    /// Contacts belonging to one customer.
    pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Contact>> {
        self.conn
            .get_json(&[config::CONTACTS, "customer", &customer_id.to_string()], &[])
            .await
    }

    /// Contacts flagged as the primary contact of their customer.
    pub async fn primary(&self) -> Result<Vec<Contact>> {
        self.conn.get_json(&[config::CONTACTS, "primary"], &[]).await
    }

    /// Search contacts by name substring.
    pub async fn search(&self, name: &str) -> Result<Vec<Contact>> {
        self.conn
            .get_json(&[config::CONTACTS, "search"], &[("name", name.to_string())])
            .await
    }

    /// Look up the contact with an exact email address.
    pub async fn by_email(&self, email: &str) -> Result<Option<Contact>> {
        match self
            .conn
            .get_json(&[config::CONTACTS, "email"], &[("email", email.to_string())])
            .await
        {
            Ok(contact) => Ok(Some(contact)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, contact: &Contact) -> Result<Contact> {
        self.conn
            .post_json(&[config::CONTACTS], &[], Some(contact))
            .await
    }

    pub async fn update(&self, id: i64, contact: &Contact) -> Result<Contact> {
        self.conn
            .put_json(&[config::CONTACTS, &id.to_string()], contact)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.conn.delete(&[config::CONTACTS, &id.to_string()]).await
    }
}
