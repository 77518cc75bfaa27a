//! `rowlock schema` implementations.

use super::output::write_output;
use crate::cli::SchemaArgs;
use rowlock::config::Config;
use rowlock::error::{Result, RowLockError};
use rowlock::schema::{self, Dialect, SqlBlueprint};

pub(super) fn cmd_lockable(args: SchemaArgs) -> Result<()> {
    let script = render(&args, schema::lockable::<SqlBlueprint>)?;
    write_output(args.output.as_deref(), &script)
}

pub(super) fn cmd_drop_lockable(args: SchemaArgs) -> Result<()> {
    let script = render(&args, schema::drop_lockable::<SqlBlueprint>)?;
    write_output(args.output.as_deref(), &script)
}

/// Build the blueprint for `args.table` with `define` and render it.
pub(super) fn render(
    args: &SchemaArgs,
    define: fn(&mut SqlBlueprint, &Config) -> Result<()>,
) -> Result<String> {
    let dialect = Dialect::from_str(&args.dialect).ok_or_else(|| {
        RowLockError::UserError(format!(
            "unknown dialect '{}' (expected mysql or postgres)",
            args.dialect
        ))
    })?;
    let config = Config::load_or_default(args.config.as_ref())?;

    let mut blueprint = SqlBlueprint::new(args.table.as_str());
    define(&mut blueprint, &config)?;
    blueprint.to_script(dialect)
}
