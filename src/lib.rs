//! Lab-report clinical analysis core: pattern extraction of named clinical
//! values from OCR text, classification against fixed reference ranges, and
//! analytics rollups over a user's stored reports.

pub mod analysis; // extraction dispatch + clinical classification
pub mod analytics; // health score + trend rollups
pub mod config;
pub mod models;
pub mod report; // report document assembly
pub mod store; // in-process report store (database seam)

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host binary.
/// Library code only emits events; whether and how they are collected is the
/// enclosing service's choice.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
