//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. It is the "logging sink" the
//! order intake writes its diagnostic records to.
//!
//! ## Configuration
//!
//! - **Filtering** via `RUST_LOG`; without it, `info,tower_http=debug` is used so order
//!   records and request traces are visible out of the box
//! - **Compact format** with the module prefix hidden (`with_target(false)`)
//!
//! ```bash
//! # Default: order records + HTTP request traces
//! cargo run -p needlefern-server
//!
//! # Only warnings and errors
//! RUST_LOG=warn cargo run -p needlefern-server
//!
//! # Catalog actor internals
//! RUST_LOG=info,needlefern_core::catalog=debug cargo run -p needlefern-server
//! ```
//!
//! ## What an accepted order looks like
//!
//! ```text
//! INFO submit_order: New order received order_id=1760870400123 customer=Alice email=a@x.com payment_method=card total_items=1
//! ```
use tracing_subscriber::EnvFilter;

/// Fallback filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
