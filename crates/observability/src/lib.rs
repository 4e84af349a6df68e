//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Initialize with human-readable output (interactive use).
pub fn init_pretty() {
    tracing::init(tracing::LogFormat::Text);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
