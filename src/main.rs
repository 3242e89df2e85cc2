use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use tw_merge::commands::{handle_config_command, handle_explain_command, handle_merge_command};
use tw_merge::{Cli, Commands, TailwindMerge};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    cli.config.validate().map_err(anyhow::Error::msg)?;
    let config = cli.config.load().context("Failed to load configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Handle commands
    match cli.command {
        Commands::Merge(args) => {
            let merger = TailwindMerge::new(config).context("Invalid configuration")?;
            handle_merge_command(&merger, &args, io::stdin().lock(), &mut out)
                .context("Failed to merge classes")?;
        }
        Commands::Explain(args) => {
            let merger = TailwindMerge::new(config).context("Invalid configuration")?;
            handle_explain_command(&merger, &args, &mut out).context("Failed to explain classes")?;
        }
        Commands::Config(args) => {
            // Build once so broken theme references are reported here as well
            TailwindMerge::new(config.clone()).context("Invalid configuration")?;
            handle_config_command(&config, &args, &mut out).context("Failed to print configuration")?;
        }
    }

    Ok(())
}
