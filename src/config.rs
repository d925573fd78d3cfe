/// Crate-level constants
pub const CRATE_NAME: &str = "labinsight";
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{CRATE_NAME}=info")
}
