//! Add and drop the lock columns.

use super::blueprint::{Blueprint, ForeignKey};
use super::identifier::{MAX_IDENTIFIER_LEN, is_valid_identifier};
use crate::config::Config;
use crate::error::{Result, RowLockError};

/// Conventional name of the foreign key on `table.column`.
pub fn foreign_key_name(table: &str, column: &str) -> String {
    format!("{}_{}_foreign", table, column)
}

/// Add the lock flag, the owner column and the owner foreign key.
///
/// The foreign key references `actor.table`.`actor.primary_key` from config
/// and uses the configured on-delete action (restrict by default).
pub fn lockable<B: Blueprint + ?Sized>(table: &mut B, config: &Config) -> Result<()> {
    let columns = &config.columns;
    let name = checked_foreign_key_name(table.table(), &columns.locked_by)?;

    table.boolean(&columns.locked, false);
    table.unsigned_integer(&columns.locked_by, true);

    let key = ForeignKey {
        name,
        column: columns.locked_by.clone(),
        references_table: config.actor.table.clone(),
        references_column: config.actor.primary_key.clone(),
        on_delete: config.on_delete,
    };
    table.foreign(key);

    tracing::debug!(table = table.table(), "lockable columns defined");
    Ok(())
}

/// Drop the owner foreign key, then the owner column, then the lock flag.
pub fn drop_lockable<B: Blueprint + ?Sized>(table: &mut B, config: &Config) -> Result<()> {
    let columns = &config.columns;
    let name = checked_foreign_key_name(table.table(), &columns.locked_by)?;

    table.drop_foreign(&name);
    table.drop_column(&columns.locked_by);
    table.drop_column(&columns.locked);

    tracing::debug!(table = table.table(), "lockable columns dropped");
    Ok(())
}

/// Validate the table and the foreign key name derived from it.
fn checked_foreign_key_name(table: &str, column: &str) -> Result<String> {
    if !is_valid_identifier(table) {
        return Err(RowLockError::SchemaError(format!(
            "'{}' is not a valid table name",
            table
        )));
    }

    let name = foreign_key_name(table, column);
    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(RowLockError::SchemaError(format!(
            "table name '{}' is too long: foreign key name '{}' exceeds {} characters",
            table, name, MAX_IDENTIFIER_LEN
        )));
    }
    if !is_valid_identifier(&name) {
        return Err(RowLockError::SchemaError(format!(
            "'{}' is not a valid foreign key name for table '{}'",
            name, table
        )));
    }
    Ok(name)
}
