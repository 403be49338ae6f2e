//! Dashboard loader tests against the in-memory stub source: fail-soft
//! degradation, fetch phases, and ordering of overlapping loads.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{opp, Call, StubSource};
use crm_dashboard_sdk::models::{EntityCounts, MonthlySales, StatusCounts};
use crm_dashboard_sdk::DashboardLoader;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn placeholder() -> Vec<MonthlySales> {
    ["Jan", "Feb", "Mar"]
        .into_iter()
        .map(|m| MonthlySales::new(m, Decimal::ZERO))
        .collect()
}

const SAMPLE_COUNTS: EntityCounts = EntityCounts {
    customers: 2,
    contacts: 3,
    opportunities: 3,
    activities: 2,
    products: 1,
};

// ---------------------------------------------------------------------------
// Successful loads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_aggregates_every_collection() {
    let loader = DashboardLoader::new(StubSource::sample());

    let summary = loader.load().await;
    assert!(!summary.degraded);
    assert_eq!(summary.entity_counts, SAMPLE_COUNTS);
    assert_eq!(
        summary.opportunity_summary.counts,
        StatusCounts {
            open: 1,
            won: 2,
            lost: 0,
            total: 3
        }
    );
    assert_eq!(summary.opportunity_summary.values.open, dec!(200));
    assert_eq!(summary.opportunity_summary.values.won, dec!(1500));
    assert_eq!(summary.activity_summary.recent.len(), 1);
    assert_eq!(summary.activity_summary.upcoming.len(), 1);
    assert_eq!(summary.sales_series, vec![MonthlySales::new("Mar", dec!(1500))]);
}

#[tokio::test]
async fn load_issues_each_request_once() {
    let loader = DashboardLoader::new(StubSource::sample());
    loader.load().await;

    let src = loader.source();
    for call in [
        Call::Customers,
        Call::Contacts,
        Call::Products,
        Call::Opportunities,
        Call::Activities,
        Call::Upcoming,
        Call::Recent,
    ] {
        assert_eq!(src.calls(call), 1, "{call:?}");
    }
}

#[tokio::test]
async fn oversized_amounts_still_produce_a_summary() {
    let source = StubSource::sample();
    let mut big = opp("Closed Won", None, Some("2024-07-04"));
    big.amount = Some(Decimal::MAX);
    source.set_opportunities(vec![big.clone(), big]);
    let loader = DashboardLoader::new(source);

    let summary = loader.load().await;
    assert!(!summary.degraded);
    assert_eq!(summary.opportunity_summary.values.won, Decimal::MAX);
    assert_eq!(summary.sales_series, vec![MonthlySales::new("Jul", Decimal::MAX)]);
}

#[tokio::test]
async fn empty_backend_gives_zero_summary_with_placeholder() {
    let loader = DashboardLoader::new(StubSource::empty());

    let summary = loader.load().await;
    assert!(!summary.degraded);
    assert_eq!(summary.entity_counts, EntityCounts::default());
    assert_eq!(summary.opportunity_summary.counts, StatusCounts::default());
    assert_eq!(summary.sales_series, placeholder());
}

#[tokio::test]
async fn first_batch_runs_concurrently() {
    let delay = Duration::from_millis(300);
    let stub = StubSource::sample()
        .delayed(Call::Customers, delay)
        .delayed(Call::Contacts, delay)
        .delayed(Call::Products, delay)
        .delayed(Call::Opportunities, delay)
        .delayed(Call::Activities, delay);
    let loader = DashboardLoader::new(stub);

    // Sequential fetching would take five delays.
    let summary = tokio::time::timeout(Duration::from_millis(1200), loader.load())
        .await
        .expect("first batch should be fetched concurrently");
    assert!(!summary.degraded);
}

// ---------------------------------------------------------------------------
// Degradation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_products_degrades_without_error() {
    let loader = DashboardLoader::new(StubSource::sample().failing(Call::Products));

    let summary = loader.load().await;
    assert!(summary.degraded);
    assert_eq!(summary.opportunity_summary.counts, StatusCounts::default());
    assert_eq!(summary.opportunity_summary.values.open, Decimal::ZERO);
    assert_eq!(summary.opportunity_summary.values.won, Decimal::ZERO);
    assert!(summary.activity_summary.recent.is_empty());
    assert!(summary.activity_summary.upcoming.is_empty());
    assert_eq!(summary.sales_series, placeholder());
}

#[tokio::test]
async fn any_primary_failure_degrades() {
    for call in [
        Call::Customers,
        Call::Contacts,
        Call::Products,
        Call::Opportunities,
        Call::Activities,
    ] {
        let loader = DashboardLoader::new(StubSource::sample().failing(call));
        let summary = loader.load().await;
        assert!(summary.degraded, "{call:?}");
        assert_eq!(summary.opportunity_summary.counts.total, 0, "{call:?}");
    }
}

#[tokio::test]
async fn supplementary_failure_degrades() {
    for call in [Call::Upcoming, Call::Recent] {
        let loader = DashboardLoader::new(StubSource::sample().failing(call));
        let summary = loader.load().await;
        assert!(summary.degraded, "{call:?}");
        assert!(summary.activity_summary.recent.is_empty());
        assert!(summary.activity_summary.upcoming.is_empty());
        assert_eq!(summary.sales_series, placeholder());
    }
}

#[tokio::test]
async fn batch_failure_skips_supplementary_fetches() {
    let loader = DashboardLoader::new(StubSource::sample().failing(Call::Opportunities));
    loader.load().await;

    assert_eq!(loader.source().calls(Call::Upcoming), 0);
    assert_eq!(loader.source().calls(Call::Recent), 0);
}

#[tokio::test]
async fn batch_fails_fast_without_waiting_for_slow_requests() {
    let stub = StubSource::sample()
        .delayed(Call::Customers, Duration::from_secs(30))
        .failing(Call::Products);
    let loader = DashboardLoader::new(stub);

    let summary = tokio::time::timeout(Duration::from_secs(5), loader.load())
        .await
        .expect("a failed request should settle the batch immediately");
    assert!(summary.degraded);
}

#[tokio::test]
async fn first_failure_has_zero_entity_counts() {
    let loader = DashboardLoader::new(StubSource::sample().failing(Call::Customers));
    let summary = loader.load().await;
    assert_eq!(summary.entity_counts, EntityCounts::default());
}

#[tokio::test]
async fn failure_keeps_previous_entity_counts() {
    let loader = DashboardLoader::new(StubSource::sample());
    let first = loader.load().await;
    assert_eq!(first.entity_counts, SAMPLE_COUNTS);

    loader.source().set_failing(Call::Activities, true);
    let second = loader.load().await;
    assert!(second.degraded);
    assert_eq!(second.entity_counts, SAMPLE_COUNTS);
    assert_eq!(second.opportunity_summary.counts, StatusCounts::default());

    loader.source().set_failing(Call::Activities, false);
    let third = loader.load().await;
    assert!(!third.degraded);
    assert_eq!(third, first);
}

// ---------------------------------------------------------------------------
// latest / generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn latest_is_none_before_first_load() {
    let loader = DashboardLoader::new(StubSource::sample());
    assert!(loader.latest().is_none());
    assert_eq!(loader.generation(), 0);
}

#[tokio::test]
async fn latest_tracks_last_settled_load() {
    let loader = DashboardLoader::new(StubSource::sample());
    let first = loader.load().await;
    assert_eq!(loader.latest(), Some(first));

    loader
        .source()
        .set_opportunities(vec![opp("Closed Lost", Some(10), Some("2024-01-01"))]);
    let second = loader.load().await;
    assert_eq!(second.opportunity_summary.counts.lost, 1);
    assert_eq!(loader.latest(), Some(second));
    assert_eq!(loader.generation(), 2);
}

#[tokio::test]
async fn stale_load_does_not_overwrite_newer_summary() {
    // The first load is held up by a slow customers request; a second load
    // started later settles first and must stay published.
    let stub = Arc::new(StubSource::sample().delayed(Call::Customers, Duration::from_millis(400)));
    let loader = Arc::new(DashboardLoader::new(stub.clone()));

    let first = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Customers is slow for every load, so a failing products request is
    // what lets the second load settle first.
    stub.set_failing(Call::Products, true);
    let second = loader.load().await;
    assert!(second.degraded);
    assert_eq!(loader.latest(), Some(second.clone()));

    stub.set_failing(Call::Products, false);
    let first = first.await.unwrap();
    assert!(!first.degraded);

    // The older load returned its own result but did not replace the newer one.
    assert_eq!(loader.generation(), 2);
    assert_eq!(loader.latest(), Some(second));
}
