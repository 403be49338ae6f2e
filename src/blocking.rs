//! Blocking wrapper around [`CrmSdk`] for callers without an async runtime.
//!
//! Owns a current-thread Tokio runtime and blocks on the async SDK for each
//! call. Must not be used from inside another async runtime.
//!
//! # Example
//!
//! ```no_run
//! use crm_dashboard_sdk::BlockingCrmSdk;
//!
//! let sdk = BlockingCrmSdk::builder().build().unwrap();
//!
//! // Run any async SDK method via closure
//! let customers = sdk.run(|s| async move { s.customers().list().await }).unwrap();
//!
//! // Convenience method for the dashboard
//! let dashboard = sdk.load_dashboard();
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::error::{CrmError, Result};
use crate::models::DashboardSummary;
use crate::CrmSdk;

// ---------------------------------------------------------------------------
// BlockingCrmSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BlockingCrmSdk`] instance.
#[derive(Default)]
pub struct BlockingCrmSdkBuilder {
    inner: crate::CrmSdkBuilder,
}

impl BlockingCrmSdkBuilder {
    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the runtime and the underlying async SDK.
    pub fn build(self) -> Result<BlockingCrmSdk> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CrmError::Runtime(format!("Failed to start runtime: {e}")))?;
        let sdk = self.inner.build()?;
        Ok(BlockingCrmSdk { runtime, sdk })
    }
}

// ---------------------------------------------------------------------------
// BlockingCrmSdk
// ---------------------------------------------------------------------------

/// Blocking wrapper around [`CrmSdk`].
///
/// Use [`run()`](Self::run) to execute any async SDK method to completion.
pub struct BlockingCrmSdk {
    runtime: Runtime,
    sdk: CrmSdk,
}

impl BlockingCrmSdk {
    /// Create a new builder for configuring the blocking SDK.
    pub fn builder() -> BlockingCrmSdkBuilder {
        BlockingCrmSdkBuilder::default()
    }

    /// Run an async SDK operation to completion on the owned runtime.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use crm_dashboard_sdk::BlockingCrmSdk;
    /// # fn example() -> crm_dashboard_sdk::Result<()> {
    /// # let sdk = BlockingCrmSdk::builder().build()?;
    /// let open = sdk.run(|s| async move {
    ///     s.opportunities().by_status(&"Proposal".into()).await
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn run<'s, F, Fut, T>(&'s self, f: F) -> T
    where
        F: FnOnce(&'s CrmSdk) -> Fut,
        Fut: Future<Output = T> + 's,
    {
        self.runtime.block_on(f(&self.sdk))
    }

    /// Load the dashboard, blocking until it settles.
    pub fn load_dashboard(&self) -> DashboardSummary {
        self.runtime.block_on(self.sdk.load_dashboard())
    }

    /// The summary published by the most recent dashboard load.
    pub fn latest_dashboard(&self) -> Option<DashboardSummary> {
        self.sdk.latest_dashboard()
    }

    /// Borrow the underlying async SDK.
    pub fn sdk(&self) -> &CrmSdk {
        &self.sdk
    }
}
