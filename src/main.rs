use anyhow::Result;
use clap::Parser;
use obligo::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
