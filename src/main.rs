use clap::Parser;

use newsdesk::cli::Cli;
use newsdesk::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    tracing::info!(endpoint = %config.api.endpoint, "starting newsdesk");

    newsdesk::ui::run(config)
}
