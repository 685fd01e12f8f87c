use anyhow::Result;
use clap::Parser;
use scriptalias_cli::args::CliArgs;
use scriptalias_cli::driver;
use scriptalias_cli::tracing_config::init_tracing;

fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse();
    driver::run(&args)
}
