// ── Bench Core: Module Contract ────────────────────────────────────────────
//
// `NativeModule` is the seam the host-side registry sees: a stable name to
// route calls with. `BenchModule` is the one implementation here, carrying
// the arithmetic op the application layer times round trips against and
// the CPU metrics op.

use crate::constants::MODULE_NAME;
use crate::error::BenchResult;
use crate::metrics::{CpuMetrics, CpuSampler};

/// Contract every native module presents to the host registry.
pub trait NativeModule {
    /// Fixed identifier the host routes calls with. Stable across calls.
    fn name(&self) -> &'static str;
}

/// The Bench bridge module.
///
/// Constructed once when the host instantiates the module and dropped when
/// the host tears its registry down. Stateless apart from the warm metrics
/// sampler.
pub struct BenchModule {
    sampler: CpuSampler,
}

impl BenchModule {
    pub fn new() -> Self {
        Self {
            sampler: CpuSampler::new(),
        }
    }

    /// Multiply two doubles. Total for every IEEE-754 input, so NaN and
    /// the infinities flow through untouched and there is no error path.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Sample global CPU usage. May block up to the sysinfo refresh
    /// interval while the counters settle.
    pub fn cpu(&self) -> BenchResult<CpuMetrics> {
        self.sampler.sample()
    }
}

impl NativeModule for BenchModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }
}

impl Default for BenchModule {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
