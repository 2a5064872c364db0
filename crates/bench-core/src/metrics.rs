// ── Bench Core: CPU Metrics ────────────────────────────────────────────────
//
// Samples global CPU usage through `sysinfo`. A meaningful reading needs
// two refreshes separated by at least `MINIMUM_CPU_UPDATE_INTERVAL`, so the
// sampler keeps one warm `System` for the life of the module instead of
// rebuilding it per call. Access is serialized with a `parking_lot::Mutex`;
// a sample may block up to the refresh interval while the counters settle.

use std::thread;
use std::time::Instant;

use log::{debug, info};
use parking_lot::Mutex;
use serde::Serialize;
use sysinfo::System;

use crate::error::{BenchError, BenchResult};

/// A point-in-time CPU reading, in percent across all cores combined.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CpuMetrics {
    /// Global CPU usage, 0.0 to 100.0.
    pub cpu: f32,
}

struct SamplerInner {
    sys: System,
    /// `None` until the first sample has warmed the counters.
    last_refresh: Option<Instant>,
}

/// Long-lived CPU usage sampler shared by every caller of the metrics op.
pub struct CpuSampler {
    inner: Mutex<SamplerInner>,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SamplerInner {
                sys: System::new(),
                last_refresh: None,
            }),
        }
    }

    /// Take one CPU usage reading.
    ///
    /// The first call refreshes twice with the sysinfo minimum interval in
    /// between. Later calls refresh once, sleeping only when invoked faster
    /// than the counters can update.
    pub fn sample(&self) -> BenchResult<CpuMetrics> {
        let mut inner = self.inner.lock();

        match inner.last_refresh {
            None => {
                inner.sys.refresh_cpu_usage();
                thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
                info!(
                    "[metrics] cpu sampler warmed up ({} cpus)",
                    inner.sys.cpus().len()
                );
            }
            Some(at) => {
                if let Some(wait) = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL.checked_sub(at.elapsed())
                {
                    thread::sleep(wait);
                }
            }
        }

        inner.sys.refresh_cpu_usage();
        inner.last_refresh = Some(Instant::now());

        if inner.sys.cpus().is_empty() {
            return Err(BenchError::metrics("no cpus visible to sysinfo"));
        }

        let cpu = inner.sys.global_cpu_usage();
        debug!("[metrics] global cpu usage {cpu:.1}%");
        Ok(CpuMetrics { cpu })
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_repeat_samples_are_in_range() {
        let sampler = CpuSampler::new();
        let first = sampler.sample().expect("first sample");
        assert!((0.0..=100.0).contains(&first.cpu), "cpu = {}", first.cpu);
        let second = sampler.sample().expect("second sample");
        assert!((0.0..=100.0).contains(&second.cpu), "cpu = {}", second.cpu);
    }

    #[test]
    fn metrics_serialize_to_flat_json() {
        let metrics = CpuMetrics { cpu: 12.5 };
        let json = serde_json::to_string(&metrics).expect("serialize");
        assert_eq!(json, r#"{"cpu":12.5}"#);
    }
}
