//! CLI argument parsing for rowlock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// rowlock: advisory row locking for database records.
///
/// Generates the migration statements that add or remove the lock columns
/// on a table, and shows the configuration the library will use.
#[derive(Parser, Debug)]
#[command(name = "rowlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for rowlock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Schema migration helpers.
    ///
    /// Render the statements that make a table lockable or undo it.
    Schema(SchemaCommand),

    /// Configuration commands.
    Config(ConfigCommand),
}

/// Arguments for the `schema` command.
#[derive(Parser, Debug)]
pub struct SchemaCommand {
    #[command(subcommand)]
    pub action: SchemaAction,
}

/// Schema subcommands.
#[derive(Subcommand, Debug)]
pub enum SchemaAction {
    /// Add `is_locked`, `locked_by_id` and the foreign key to the actor table.
    Lockable(SchemaArgs),

    /// Drop the foreign key and both lock columns.
    DropLockable(SchemaArgs),
}

/// Arguments shared by the schema subcommands.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Table to alter.
    pub table: String,

    /// SQL dialect (mysql, postgres).
    #[arg(short, long, default_value = "mysql")]
    pub dialect: String,

    /// Path to a rowlock.yaml config file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the statements to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML.
    Show(ConfigShowArgs),
}

/// Arguments for `config show`.
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to a rowlock.yaml config file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_schema_lockable() {
        let cli = Cli::try_parse_from([
            "rowlock", "schema", "lockable", "posts", "--dialect", "postgres",
        ])
        .unwrap();

        match cli.command {
            Command::Schema(SchemaCommand {
                action: SchemaAction::Lockable(args),
            }) => {
                assert_eq!(args.table, "posts");
                assert_eq!(args.dialect, "postgres");
                assert!(args.config.is_none());
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_drop_lockable_with_defaults() {
        let cli = Cli::try_parse_from(["rowlock", "schema", "drop-lockable", "posts"]).unwrap();

        match cli.command {
            Command::Schema(SchemaCommand {
                action: SchemaAction::DropLockable(args),
            }) => assert_eq!(args.dialect, "mysql"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn schema_requires_table() {
        assert!(Cli::try_parse_from(["rowlock", "schema", "lockable"]).is_err());
    }
}
