// ── Bench Core: Error Types ────────────────────────────────────────────────
// Single canonical error enum for the crate, built with `thiserror`.
//
// The module contract operations (`name`, `multiply`) are total and never
// construct one of these. Only the metrics subsystem can fail. The FFI
// crate converts to its own flat error at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// CPU statistics are not available on this platform or device.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl BenchError {
    /// Create a metrics error from any displayable detail.
    pub fn metrics(message: impl Into<String>) -> Self {
        Self::Metrics(message.into())
    }
}

/// All fallible bench-core operations return this type.
pub type BenchResult<T> = Result<T, BenchError>;

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_error_displays_detail() {
        let err = BenchError::metrics("no cpus visible");
        assert_eq!(err.to_string(), "Metrics error: no cpus visible");
    }
}
