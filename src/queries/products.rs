//! Product catalog queries against the `/products` endpoints.

use rust_decimal::Decimal;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::Product;

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the product catalog.
pub struct ProductQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every product.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.conn.get_json(&[config::PRODUCTS], &[]).await
    }

    /// Get a single product by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Product>> {
        self.conn
            .get_optional(&[config::PRODUCTS, &id.to_string()])
            .await
    }

    /// Get a product by its catalog code, or `None` if no product has it.
    pub async fn by_code(&self, code: &str) -> Result<Option<Product>> {
        self.conn.get_optional(&[config::PRODUCTS, "code", code]).await
    }

    /// Search products by name substring.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>> {
        self.conn
            .get_json(&[config::PRODUCTS, "search"], &[("name", name.to_string())])
            .await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.conn
            .get_json(&[config::PRODUCTS, "category", category], &[])
            .await
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Product>> {
        self.conn
            .get_json(&[config::PRODUCTS, "status", status], &[])
            .await
    }

    /// Products priced at or below `max_price`.
    pub async fn under_price(&self, max_price: Decimal) -> Result<Vec<Product>> {
        self.conn
            .get_json(
                &[config::PRODUCTS, "price", "max"],
                &[("maxPrice", max_price.to_string())],
            )
            .await
    }

    /// Products priced between `min_price` and `max_price`.
    pub async fn in_price_range(&self, min_price: Decimal, max_price: Decimal) -> Result<Vec<Product>> {
        let query = [
            ("minPrice", min_price.to_string()),
            ("maxPrice", max_price.to_string()),
        ];
        self.conn
            .get_json(&[config::PRODUCTS, "price", "range"], &query)
            .await
    }

    pub async fn create(&self, product: &Product) -> Result<Product> {
        self.conn
            .post_json(&[config::PRODUCTS], &[], Some(product))
            .await
    }

    pub async fn update(&self, id: i64, product: &Product) -> Result<Product> {
        self.conn
            .put_json(&[config::PRODUCTS, &id.to_string()], product)
            .await
    }

    /// Change only the status of a product.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<Product> {
        self.conn
            .patch_json(
                &[config::PRODUCTS, &id.to_string(), "status"],
                &[("status", status.to_string())],
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.conn.delete(&[config::PRODUCTS, &id.to_string()]).await
    }
}
