//! AQI CLI - Command line tool for inspecting hourly PM2.5 AQI readings.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqi-cli",
    version,
    about = "Fresno PM2.5 AQI readings toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqi_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting aqi-cli");
    aqi_cmd::run(cli.command)
}
