// bench-cli — drive the Bench module operations from the terminal.
//
// A diagnostic harness, not a product surface: the same operations the
// managed application layer reaches over the bridge, runnable locally
// without a host runtime.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use bench_core::{BenchModule, CpuMetrics, NativeModule};

#[derive(Parser)]
#[command(
    name = "bench-cli",
    about = "Exercise the Bench bridge module from the terminal"
)]
pub struct CliArgs {
    #[command(subcommand)]
    cmd: CliCmd,
}

impl CliArgs {
    pub fn run(&self) -> Result<()> {
        self.cmd.run()
    }
}

#[derive(Debug, Subcommand)]
enum CliCmd {
    /// Print the module registration name
    Name,
    /// Multiply two doubles through the bridge op
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },
    /// Sample global CPU usage through the metrics op
    Cpu {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
        /// Number of readings to average
        #[arg(
            long,
            env = "BENCH_CPU_SAMPLES",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        samples: u32,
    },
}

impl CliCmd {
    fn run(&self) -> Result<()> {
        let module = BenchModule::new();
        match self {
            Self::Name => println!("{}", module.name()),
            Self::Multiply { a, b } => println!("{}", module.multiply(*a, *b)),
            Self::Cpu { json, samples } => {
                let mut total = 0.0f32;
                for _ in 0..*samples {
                    total += module.cpu()?.cpu;
                }
                let metrics = CpuMetrics {
                    cpu: total / *samples as f32,
                };
                info!("[cli] averaged {samples} cpu reading(s)");
                if *json {
                    println!("{}", serde_json::to_string(&metrics)?);
                } else {
                    println!("cpu: {:.1}%", metrics.cpu);
                }
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
