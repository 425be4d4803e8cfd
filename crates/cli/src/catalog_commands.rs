use {anyhow::Result, clap::Subcommand};

use {
    agentdesk_catalog::{
        CatalogList, OptionCatalog,
        validate::{self, Severity},
    },
    agentdesk_config::AgentdeskConfig,
};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print the effective catalog.
    Show {
        /// Print JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
    /// Validate the effective catalog and report errors/warnings.
    Check {
        /// Show informational diagnostics in addition to errors and warnings.
        #[arg(long)]
        verbose: bool,
    },
}

pub async fn handle_catalog(action: CatalogAction, config: &AgentdeskConfig) -> Result<()> {
    match action {
        CatalogAction::Show { json } => show(config, json),
        CatalogAction::Check { verbose } => check(config, verbose),
    }
}

/// ANSI color codes.
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn show(config: &AgentdeskConfig, json: bool) -> Result<()> {
    let catalog = agentdesk_catalog::load_catalog(&config.catalog)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    for list in CatalogList::ALL {
        println!("{BOLD}{}{RESET} ({})", list.label(), list.key());
        for item in catalog.items(list) {
            let default = if item.default { " (default)" } else { "" };
            println!("  {:<24} {}{default}", item.id, item.label);
        }
        println!();
    }
    Ok(())
}

fn check(config: &AgentdeskConfig, verbose: bool) -> Result<()> {
    // Parse without the loader's validation so every diagnostic is printed.
    let catalog: OptionCatalog = match config.catalog.path.as_deref() {
        Some(path) => {
            eprintln!("Checking {}\n", path.display());
            agentdesk_config::load_document(path)?
        },
        None => {
            eprintln!("No catalog file configured; checking the built-in catalog.\n");
            OptionCatalog::builtin()
        },
    };
    let result = validate::validate(&catalog);

    let mut shown = 0;
    for d in &result.diagnostics {
        if d.severity == Severity::Info && !verbose {
            continue;
        }

        let (color, label) = match d.severity {
            Severity::Error => (RED, "error"),
            Severity::Warning => (YELLOW, "warning"),
            Severity::Info => (CYAN, "info"),
        };
        eprintln!("  {BOLD}{color}{label}{RESET} {}: {}", d.path, d.message);
        shown += 1;
    }

    let errors = result.count(Severity::Error);
    let warnings = result.count(Severity::Warning);

    if shown > 0 {
        eprintln!();
    }

    if errors == 0 && warnings == 0 {
        eprintln!("No issues found.");
    } else {
        eprintln!("{errors} error(s), {warnings} warning(s)");
    }

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
