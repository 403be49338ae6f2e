//! Fetch-then-aggregate dashboard loading with fail-soft error handling.
//!
//! A load runs in two phases: the five full collections are fetched
//! concurrently and fail fast, then the upcoming and recent activity lists
//! are fetched one after the other. Any failure replaces the result with
//! the degraded zero state; errors never reach the caller.
//!
//! Overlapping loads are ordered by a generation number taken when each load
//! starts. A load that settles after a newer one has already published is
//! returned to its own caller but never replaces the newer summary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::aggregate::Snapshot;
use super::source::DashboardSource;
use crate::error::Result;
use crate::models::{DashboardSummary, EntityCounts};

struct Published {
    generation: u64,
    summary: DashboardSummary,
}

/// Loads dashboard summaries from a [`DashboardSource`] and remembers the
/// most recent one.
pub struct DashboardLoader<S> {
    source: S,
    generation: AtomicU64,
    published: Mutex<Option<Published>>,
}

impl<S: DashboardSource> DashboardLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            published: Mutex::new(None),
        }
    }

    /// The data source this loader reads from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load and aggregate a fresh dashboard summary.
    ///
    /// Always returns a summary. If any fetch fails, the failure is logged and
    /// the result is [`DashboardSummary::degraded`], carrying over the entity
    /// counts of the last published summary.
    pub async fn load(&self) -> DashboardSummary {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, "loading dashboard");

        let summary = match self.fetch().await {
            Ok(snapshot) => DashboardSummary::aggregate(snapshot),
            Err(e) => {
                warn!(generation, error = %e, "dashboard fetch failed; showing empty summary");
                DashboardSummary::degraded(self.published_counts())
            }
        };

        self.publish(generation, &summary);
        summary
    }

    /// Fetch every collection the dashboard needs, without aggregating.
    ///
    /// Fails with the first error encountered. Requests of the first batch
    /// that are still in flight when another one fails are dropped.
    pub async fn fetch(&self) -> Result<Snapshot> {
        let src = &self.source;
        let (customers, contacts, products, opportunities, activities) = tokio::try_join!(
            src.list_customers(),
            src.list_contacts(),
            src.list_products(),
            src.list_opportunities(),
            src.list_activities(),
        )?;

        let upcoming_activities = src.list_upcoming_activities().await?;
        let recent_activities = src.list_recent_activities().await?;

        Ok(Snapshot {
            customers,
            contacts,
            products,
            opportunities,
            activities,
            upcoming_activities,
            recent_activities,
        })
    }

    /// The last published summary, if any load has settled yet.
    pub fn latest(&self) -> Option<DashboardSummary> {
        self.lock().as_ref().map(|p| p.summary.clone())
    }

    /// Number of loads started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn published_counts(&self) -> EntityCounts {
        self.lock()
            .as_ref()
            .map(|p| p.summary.entity_counts)
            .unwrap_or_default()
    }

    fn publish(&self, generation: u64, summary: &DashboardSummary) {
        let mut slot = self.lock();
        if let Some(current) = slot.as_ref() {
            if current.generation > generation {
                debug!(
                    generation,
                    published = current.generation,
                    "stale dashboard load settled late; not publishing"
                );
                return;
            }
        }
        *slot = Some(Published {
            generation,
            summary: summary.clone(),
        });
    }

    fn lock(&self) -> MutexGuard<'_, Option<Published>> {
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
