use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use npm_asset_audit::{
    audit::{default_client, AuditClient, AuditRequest},
    collector::collect_inventory,
    config::Config,
    output::{exit_codes, print_report, OutputMode},
    registry::ComposerRegistry,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "npm-asset-audit")]
#[command(
    author,
    version,
    about = "Detect known vulnerable versions of npm packages installed through Composer"
)]
struct Cli {
    /// Show debug output (e.g. packages skipped as not installed)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit installed npm-asset packages against the security-advisory API
    Audit {
        /// Display the raw audit response as JSON
        #[arg(short, long)]
        json: bool,

        /// Generate a Composer command that upgrades the vulnerable packages
        #[arg(short, long)]
        command: bool,

        /// Composer project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Override the audit endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Audit {
            json,
            command,
            project,
            endpoint,
        } => {
            let mode = OutputMode::from_flags(json, command);
            let project = project.unwrap_or_else(|| PathBuf::from("."));
            let endpoint = endpoint.unwrap_or(config.endpoint);

            run_audit(&project, &endpoint, config.timeout_secs, mode).await
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

async fn run_audit(
    project: &std::path::Path,
    endpoint: &str,
    timeout_secs: u64,
    mode: OutputMode,
) -> Result<u8> {
    let registry = ComposerRegistry::load(project)?;
    let inventory = collect_inventory(&registry);

    if inventory.is_empty() {
        println!("\x1b[33mThis project does not use any npm package.\x1b[0m");
        return Ok(exit_codes::SUCCESS);
    }

    let request = AuditRequest::from_inventory(&inventory);
    let client = default_client(endpoint, Duration::from_secs(timeout_secs));

    let progress = if mode == OutputMode::Table {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!(
            "Auditing {} npm packages...",
            inventory.len()
        ));
        Some(pb)
    } else {
        None
    };

    let report = client.audit(&request).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let report = report?;
    print_report(&mut io::stdout(), &report, mode)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("npm_asset_audit=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("npm_asset_audit=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'npm-asset-audit config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
