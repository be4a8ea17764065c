use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reposhowcase::{Config, RunOutcome, ShowcaseEngine};

#[derive(Parser)]
#[command(name = "reposhowcase")]
#[command(about = "Categorized GitHub repository showcase generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (defaults to XDG config location)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init {
        /// GitHub username whose repositories are showcased
        #[arg(short, long)]
        username: Option<String>,

        /// Path to the README file to update
        #[arg(short, long)]
        readme: Option<String>,
    },

    /// Fetch, classify and splice the showcase into the README
    Update {
        /// Render without writing the README
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the rendered showcase to stdout
    Preview,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    info!("Starting reposhowcase v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config(cli.config)?;

    // Execute command (default to a full update if no command specified)
    match cli.command.unwrap_or(Commands::Update { dry_run: false }) {
        Commands::Init { username, readme } => cmd_init(username, readme, &config),
        Commands::Update { dry_run } => cmd_update(dry_run, config).await,
        Commands::Preview => cmd_preview(config).await,
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

/// Load configuration from specified path or default location
fn load_config(config_path: Option<std::path::PathBuf>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load(&path),
        None => Config::load_or_default(),
    }
}

/// Initialize reposhowcase configuration
fn cmd_init(username: Option<String>, readme: Option<String>, config: &Config) -> Result<()> {
    info!("Initializing reposhowcase...");

    let mut new_config = config.clone();
    if let Some(username) = username {
        new_config.github.username = Some(username);
    }
    if let Some(readme) = readme {
        new_config.readme_path = readme;
    }

    let config_path = Config::default_config_path()?;
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    new_config.save(&config_path)?;

    println!("✅ reposhowcase initialized successfully!");
    println!("   Config: {:?}", config_path);
    match new_config.github.username {
        Some(ref username) => println!("   Username: {}", username),
        None => println!("   Next: set github.username in the config file"),
    }
    println!("   README: {}", new_config.readme_path);

    Ok(())
}

/// Run the full pipeline and report the outcome
async fn cmd_update(dry_run: bool, config: Config) -> Result<()> {
    let username = config.username()?.to_string();
    let engine = ShowcaseEngine::new(config)?;

    println!("🔍 Fetching repositories for {}...", username);

    let summary = engine.run(dry_run).await?;

    println!("   Found {} repositories", summary.fetched);
    println!("   After filtering: {} repositories", summary.kept);

    println!("\n🗂️  Classification:");
    for (name, category) in &summary.assignments {
        println!("  📁 {} -> {}", name, category);
    }

    println!();
    match summary.outcome {
        RunOutcome::Updated => println!("✅ README updated"),
        RunOutcome::Unchanged => println!("✨ No changes detected"),
        RunOutcome::Preview(markdown) => {
            println!("🔍 Dry run - rendered showcase:\n");
            println!("{}", markdown);
        }
    }

    Ok(())
}

/// Print the rendered showcase without touching the README
async fn cmd_preview(config: Config) -> Result<()> {
    let engine = ShowcaseEngine::new(config)?;

    let summary = engine.run(true).await?;

    if let RunOutcome::Preview(markdown) = summary.outcome {
        println!("{}", markdown);
    }

    Ok(())
}
