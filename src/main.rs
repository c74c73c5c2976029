use clap::Parser;
use tracing_subscriber::EnvFilter;

use tm_diff::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tm_diff=debug,info")
    } else {
        EnvFilter::new("tm_diff=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Compare(args) => {
            cli::compare::run(args, config, cli.format, cli.verbose)?;
        }
        cli::Commands::Batch(args) => {
            cli::batch::run(args, config, cli.format, cli.verbose)?;
        }
        cli::Commands::Config => {
            cli::config::run(&config)?;
        }
    }

    Ok(())
}
