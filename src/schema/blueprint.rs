//! Schema builder trait and the commands it records.

use crate::config::ReferentialAction;

/// Foreign key constraint definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,
    /// Referencing column on the blueprint's table.
    pub column: String,
    /// Referenced table.
    pub references_table: String,
    /// Referenced column.
    pub references_column: String,
    /// Action when the referenced row is deleted.
    pub on_delete: ReferentialAction,
}

/// One structural change to a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaCommand {
    AddBoolean { column: String, default: bool },
    AddUnsignedInteger { column: String, nullable: bool },
    AddForeign(ForeignKey),
    DropForeign { name: String },
    DropColumn { column: String },
}

/// Schema builder primitives for altering a single table.
pub trait Blueprint {
    /// Name of the table being altered.
    fn table(&self) -> &str;

    /// Add a non-null boolean column with a default.
    fn boolean(&mut self, column: &str, default: bool);

    /// Add an unsigned integer column; nullable columns default to null.
    fn unsigned_integer(&mut self, column: &str, nullable: bool);

    /// Add a foreign key constraint.
    fn foreign(&mut self, key: ForeignKey);

    /// Drop a foreign key constraint by name.
    fn drop_foreign(&mut self, name: &str);

    /// Drop a column.
    fn drop_column(&mut self, column: &str);
}
