// Bench — the native half of the managed↔native bridge benchmark.
//
// This crate is the foreign-function surface only: uniffi scaffolding plus
// one exported object that wraps, delegates to, and converts for
// `bench-core`. Anything with real logic lives in the core crate.
//
// The host constructs `Bench` once when it instantiates the module, routes
// calls to it under the fixed registration name, and drops it when its
// registry is torn down.

use std::sync::Arc;

use bench_core::{BenchError, BenchModule, NativeModule};
use log::info;

uniffi::setup_scaffolding!();

/// A point-in-time CPU reading crossing the FFI boundary.
#[derive(Copy, Clone, Debug, PartialEq, uniffi::Record)]
pub struct Metrics {
    /// Global CPU usage, 0.0 to 100.0.
    pub cpu: f32,
}

impl From<bench_core::CpuMetrics> for Metrics {
    fn from(metrics: bench_core::CpuMetrics) -> Self {
        Self { cpu: metrics.cpu }
    }
}

/// Failures crossing the bridge, surfaced to the host as exceptions.
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum BridgeError {
    /// CPU statistics are not available on this platform or device.
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl From<BenchError> for BridgeError {
    fn from(err: BenchError) -> Self {
        match err {
            BenchError::Metrics(msg) => Self::Metrics(msg),
        }
    }
}

/// The exported bridge module.
#[derive(uniffi::Object)]
pub struct Bench {
    inner: BenchModule,
}

#[uniffi::export]
impl Bench {
    /// Construct the module. The host owns the instance for the life of
    /// its registry.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        let inner = BenchModule::new();
        info!("[bridge] module '{}' constructed", inner.name());
        Arc::new(Self { inner })
    }

    /// The fixed registration name the application layer looks up.
    pub fn name(&self) -> String {
        self.inner.name().to_owned()
    }

    /// Multiply two doubles. Pure IEEE-754 and total, so it never fails.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        self.inner.multiply(a, b)
    }

    /// Sample global CPU usage. May block up to the sysinfo refresh
    /// interval while the counters settle.
    pub fn get_cpu(&self) -> Result<Metrics, BridgeError> {
        Ok(self.inner.cpu()?.into())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_error_preserves_core_error_detail() {
        let err = BridgeError::from(BenchError::metrics("no cpus visible to sysinfo"));
        assert_eq!(err.to_string(), "Metrics error: no cpus visible to sysinfo");
    }
}
