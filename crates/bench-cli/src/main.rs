use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = cli::CliArgs::parse();
    args.run()
}
