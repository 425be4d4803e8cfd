mod catalog_commands;

use std::{path::PathBuf, sync::Arc};

use {
    agentdesk_config::AgentdeskConfig,
    agentdesk_onboarding::SessionOptions,
    clap::{Parser, Subcommand},
    tracing::{debug, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "agentdesk", about = "agentdesk: set up conversational support agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file (skips discovery in ./ and the user config dir).
    #[arg(long, global = true, env = "AGENTDESK_CONFIG")]
    config: Option<PathBuf>,
    /// Custom config directory (overrides default ~/.config/agentdesk/).
    #[arg(long, global = true, env = "AGENTDESK_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
    /// Catalog file (overrides `catalog.path` from the config).
    #[arg(long, global = true, env = "AGENTDESK_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive agent setup wizard. Prints the configuration as JSON.
    Onboard {
        /// Start without the example FAQ entry.
        #[arg(long)]
        no_example_faq: bool,
    },
    /// Option catalog inspection.
    Catalog {
        #[command(subcommand)]
        action: catalog_commands::CatalogAction,
    },
}

/// Initialise tracing. Logs go to stderr so stdout stays clean for the
/// wizard and its JSON output.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Resolve the effective config: explicit file, else discovery; then CLI overrides.
fn load_settings(cli: &Cli) -> anyhow::Result<AgentdeskConfig> {
    if let Some(ref dir) = cli.config_dir {
        agentdesk_config::set_config_dir(dir.clone());
    }
    let mut config = match cli.config.as_deref() {
        Some(path) => agentdesk_config::load_config(path)?,
        None => agentdesk_config::discover_and_load(),
    };
    if let Some(ref catalog) = cli.catalog {
        config.catalog.path = Some(catalog.clone());
    }
    debug!(?config, "effective config");
    Ok(config)
}

async fn onboard(config: &AgentdeskConfig, no_example_faq: bool) -> anyhow::Result<()> {
    let catalog = agentdesk_catalog::load_catalog(&config.catalog)?;
    let mut options = SessionOptions::from(&config.wizard);
    if no_example_faq {
        options.example_faq = false;
    }

    match agentdesk_onboarding::wizard::run_onboarding(Arc::new(catalog), options)? {
        Some(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        None => eprintln!("No configuration produced."),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "agentdesk starting");

    let config = load_settings(&cli)?;
    match cli.command {
        Commands::Onboard { no_example_faq } => onboard(&config, no_example_faq).await,
        Commands::Catalog { action } => catalog_commands::handle_catalog(action, &config).await,
    }
}
