//! Load the CRM dashboard once and print it as JSON.
//!
//! The API base URL comes from `$CRM_API_URL` (default
//! `http://localhost:8080/api`); log verbosity from `$RUST_LOG`.

use std::process::ExitCode;

use crm_dashboard_sdk::CrmSdk;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let sdk = match CrmSdk::builder().build() {
        Ok(sdk) => sdk,
        Err(e) => {
            error!(error = %e, "failed to initialize CRM SDK");
            return ExitCode::FAILURE;
        }
    };
    info!(%sdk, "loading dashboard");

    let summary = sdk.load_dashboard().await;
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            if summary.degraded {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!(error = %e, "failed to serialize dashboard");
            ExitCode::FAILURE
        }
    }
}
