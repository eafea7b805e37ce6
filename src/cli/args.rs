//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::StorageBackend;

/// User CRUD API - user management over SQL or MongoDB
#[derive(Parser, Debug)]
#[command(name = "user-crud")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations (relational storage only)
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Storage backend, overrides STORAGE_BACKEND
    #[arg(short, long, value_enum)]
    pub storage: Option<StorageBackend>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_storage() {
        let cli = Cli::try_parse_from(["user-crud", "serve", "--storage", "mongo", "-p", "8080"])
            .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.storage, Some(StorageBackend::Mongo));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_up() {
        let cli = Cli::try_parse_from(["user-crud", "-v", "migrate", "up"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Up
            })
        ));
    }

    #[test]
    fn test_rejects_unknown_storage() {
        assert!(Cli::try_parse_from(["user-crud", "serve", "--storage", "redis"]).is_err());
    }
}
