// Bench Core — pure bridge-module semantics.
//
// Everything the FFI layer exposes lives here as plain Rust: the module
// contract, the arithmetic operation, and the CPU metrics sampler. The
// workspace-root crate only wraps, delegates, and converts.

pub mod constants;
pub mod error;
pub mod metrics;
pub mod module;

pub use constants::MODULE_NAME;
pub use error::{BenchError, BenchResult};
pub use metrics::{CpuMetrics, CpuSampler};
pub use module::{BenchModule, NativeModule};
