//! GMC CLI - Command line tool for computing meat consumption dashboard views.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gmc-cli",
    version,
    about = "Global meat consumption dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gmc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("gmc-cli {}", env!("CARGO_PKG_VERSION"));
    gmc_cmd::run(cli.command)
}
