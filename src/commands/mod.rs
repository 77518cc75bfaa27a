//! Command implementations for rowlock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod output;
mod schema;

use crate::cli::{Command, ConfigAction, ConfigCommand, ConfigShowArgs, SchemaAction, SchemaCommand};
use rowlock::config::Config;
use rowlock::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Schema(schema_cmd) => dispatch_schema(schema_cmd),
        Command::Config(config_cmd) => dispatch_config(config_cmd),
    }
}

/// Dispatch schema subcommands.
fn dispatch_schema(schema_cmd: SchemaCommand) -> Result<()> {
    match schema_cmd.action {
        SchemaAction::Lockable(args) => schema::cmd_lockable(args),
        SchemaAction::DropLockable(args) => schema::cmd_drop_lockable(args),
    }
}

/// Dispatch config subcommands.
fn dispatch_config(config_cmd: ConfigCommand) -> Result<()> {
    match config_cmd.action {
        ConfigAction::Show(args) => cmd_config_show(args),
    }
}

fn cmd_config_show(args: ConfigShowArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
