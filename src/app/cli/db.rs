//! Database command implementation.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, ProjectLayout};

#[derive(Subcommand)]
pub enum DbCommands {
    /// Dump the database to .wpdev/db/dump-<timestamp>.sql
    Dump,
    /// Import a SQL file into the database
    Import {
        /// SQL file to stream into the database client
        path: PathBuf,
    },
}

pub fn run_db(layout: ProjectLayout, command: DbCommands) -> Result<(), AppError> {
    let root = layout.root().to_path_buf();
    match command {
        DbCommands::Dump => {
            let path = api::db_dump(layout)?;
            println!("✅ Database dumped to {}", super::relative(&root, &path).display());
        }
        DbCommands::Import { path } => {
            api::db_import(layout, &path)?;
            println!("✅ Imported {}", path.display());
        }
    }
    Ok(())
}
