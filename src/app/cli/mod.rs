//! CLI Adapter.

mod db;
mod init;
mod tls;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::{AppError, ProjectLayout};

#[derive(Parser)]
#[command(name = "wpdev")]
#[command(version)]
#[command(about = "Bootstrap and drive a local WordPress dev stack", long_about = None)]
struct Cli {
    /// Path to the project config file (defaults to ./.wpdev.yml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively write .wpdev.yml, default templates, and an index page
    #[clap(visible_alias = "i")]
    Init {
        /// Accept every default without prompting
        #[arg(short, long)]
        yes: bool,
    },
    /// Render artifacts and bring the stack up
    Start,
    /// Bring the stack down
    Stop,
    /// Re-render artifacts and rebuild images
    Rebuild {
        /// Services to rebuild (all when omitted)
        services: Vec<String>,
    },
    /// Turn Xdebug on or off and rebuild the PHP image
    #[clap(visible_alias = "xd")]
    Xdebug {
        /// on | off
        mode: String,
    },
    /// Database dump and import
    Db {
        #[command(subcommand)]
        command: db::DbCommands,
    },
    /// Local TLS certificates
    Tls {
        #[command(subcommand)]
        command: tls::TlsCommands,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wpdev=debug" } else { "wpdev=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = api::current_layout(cli.config.as_deref())
        .and_then(|layout| dispatch(cli.command, layout));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, layout: ProjectLayout) -> Result<(), AppError> {
    match command {
        Commands::Init { yes } => init::run_init(layout, yes),
        Commands::Start => run_start(layout),
        Commands::Stop => run_stop(layout),
        Commands::Rebuild { services } => run_rebuild(layout, &services),
        Commands::Xdebug { mode } => run_xdebug(layout, &mode),
        Commands::Db { command } => db::run_db(layout, command),
        Commands::Tls { command } => tls::run_tls(layout, command),
    }
}

/// Show `path` relative to the project root when it lives inside it.
fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn run_start(layout: ProjectLayout) -> Result<(), AppError> {
    let root = layout.root().to_path_buf();
    let rendered = api::start(layout)?;
    println!("✅ Stack started ({} artifact(s) rendered)", rendered.len());
    for artifact in &rendered {
        println!("  • {}", relative(&root, &artifact.path).display());
    }
    Ok(())
}

fn run_stop(layout: ProjectLayout) -> Result<(), AppError> {
    api::stop(layout)?;
    println!("✅ Stack stopped");
    Ok(())
}

fn run_rebuild(layout: ProjectLayout, services: &[String]) -> Result<(), AppError> {
    api::rebuild(layout, services)?;
    if services.is_empty() {
        println!("✅ Rebuilt all services");
    } else {
        println!("✅ Rebuilt {}", services.join(", "));
    }
    Ok(())
}

fn run_xdebug(layout: ProjectLayout, mode: &str) -> Result<(), AppError> {
    let outcome = api::xdebug(layout, mode)?;
    if outcome.changed {
        println!("✅ Xdebug {}", outcome.mode.label());
    } else {
        println!("✅ Xdebug already {}; PHP image rebuilt", outcome.mode.label());
    }
    Ok(())
}
