use anyhow::{Context, Result};
use chainsmith_tools::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser)]
#[command(name = "chainsmith")]
#[command(about = "Chainsmith CLI for toolchain configuration management")]
struct Cli {
    /// Suppress warnings; print errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration
    Config {
        /// Validate only, report success or failure
        #[arg(short, long)]
        validate: bool,
        /// Print as JSON (secrets masked) instead of the summary banner
        #[arg(short, long)]
        json: bool,
    },
    /// List declared networks
    Networks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    // Loading validates; any malformed value fails here, before any command
    // logic runs.
    let config = Config::load().context("failed to load configuration")?;

    match cli.command {
        Commands::Config { validate, json } => {
            if validate {
                println!("Configuration OK");
            } else if json {
                println!("{}", config.to_json()?);
            } else {
                config.print_summary();
            }
        }
        Commands::Networks => {
            for (name, network) in &config.networks {
                let marker = if name == &config.default_network {
                    " (default)"
                } else {
                    ""
                };
                let url = network.url.as_deref().unwrap_or("(no url)");
                println!(
                    "{name:<16} {url}  [{} account(s)]{marker}",
                    network.accounts.len()
                );
            }
        }
    }

    Ok(())
}

/// Honors `RUST_LOG`; defaults to warnings only, errors only under `--quiet`.
fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
