//! Tracing and logging (shared setup).

/// Initialize process-wide tracing (stderr, filter and format from `settings`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(settings: &tracing::LogSettings) {
    tracing::init(settings);
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogFormat, LogSettings, UnknownLogFormat};
