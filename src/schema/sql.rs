//! DDL rendering blueprint.

use super::blueprint::{Blueprint, ForeignKey, SchemaCommand};
use super::identifier::is_valid_identifier;
use crate::error::{Result, RowLockError};

/// SQL dialect for rendered statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Mysql,
    Postgres,
}

impl Dialect {
    /// Parse a dialect from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Self::Mysql),
            "postgres" | "postgresql" | "pgsql" => Some(Self::Postgres),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
        }
    }

    fn quote(&self, identifier: &str) -> String {
        match self {
            Self::Mysql => format!("`{}`", identifier),
            Self::Postgres => format!("\"{}\"", identifier),
        }
    }

    fn boolean_column(&self, default: bool) -> String {
        match self {
            Self::Mysql => format!("TINYINT(1) NOT NULL DEFAULT {}", u8::from(default)),
            Self::Postgres => format!(
                "BOOLEAN NOT NULL DEFAULT {}",
                if default { "TRUE" } else { "FALSE" }
            ),
        }
    }

    fn unsigned_integer_column(&self, nullable: bool) -> &'static str {
        // PostgreSQL has no unsigned integers; the foreign key keeps values
        // within the actor table's key range.
        match (self, nullable) {
            (Self::Mysql, true) => "INT UNSIGNED NULL DEFAULT NULL",
            (Self::Mysql, false) => "INT UNSIGNED NOT NULL",
            (Self::Postgres, true) => "INTEGER NULL DEFAULT NULL",
            (Self::Postgres, false) => "INTEGER NOT NULL",
        }
    }

    fn drop_foreign_clause(&self) -> &'static str {
        match self {
            Self::Mysql => "DROP FOREIGN KEY",
            Self::Postgres => "DROP CONSTRAINT",
        }
    }

    fn add_column_clause(&self) -> &'static str {
        match self {
            Self::Mysql => "ADD",
            Self::Postgres => "ADD COLUMN",
        }
    }
}

/// Blueprint that records commands for one table and renders them as SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlBlueprint {
    table: String,
    commands: Vec<SchemaCommand>,
}

impl SqlBlueprint {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[SchemaCommand] {
        &self.commands
    }

    /// Render one `ALTER TABLE` statement per recorded command.
    ///
    /// Fails with [`RowLockError::SchemaError`] if any identifier is not a
    /// plain SQL identifier.
    pub fn to_sql(&self, dialect: Dialect) -> Result<Vec<String>> {
        let table = self.ident(&self.table, dialect)?;
        let mut statements = Vec::with_capacity(self.commands.len());

        for command in &self.commands {
            let clause = match command {
                SchemaCommand::AddBoolean { column, default } => format!(
                    "{} {} {}",
                    dialect.add_column_clause(),
                    self.ident(column, dialect)?,
                    dialect.boolean_column(*default)
                ),
                SchemaCommand::AddUnsignedInteger { column, nullable } => format!(
                    "{} {} {}",
                    dialect.add_column_clause(),
                    self.ident(column, dialect)?,
                    dialect.unsigned_integer_column(*nullable)
                ),
                SchemaCommand::AddForeign(key) => self.foreign_clause(key, dialect)?,
                SchemaCommand::DropForeign { name } => format!(
                    "{} {}",
                    dialect.drop_foreign_clause(),
                    self.ident(name, dialect)?
                ),
                SchemaCommand::DropColumn { column } => {
                    format!("DROP COLUMN {}", self.ident(column, dialect)?)
                }
            };
            statements.push(format!("ALTER TABLE {} {};", table, clause));
        }

        Ok(statements)
    }

    /// Render all statements as one script, one statement per line.
    pub fn to_script(&self, dialect: Dialect) -> Result<String> {
        let mut script = self.to_sql(dialect)?.join("\n");
        script.push('\n');
        Ok(script)
    }

    fn foreign_clause(&self, key: &ForeignKey, dialect: Dialect) -> Result<String> {
        Ok(format!(
            "ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {}",
            self.ident(&key.name, dialect)?,
            self.ident(&key.column, dialect)?,
            self.ident(&key.references_table, dialect)?,
            self.ident(&key.references_column, dialect)?,
            key.on_delete.as_sql()
        ))
    }

    fn ident(&self, name: &str, dialect: Dialect) -> Result<String> {
        if is_valid_identifier(name) {
            Ok(dialect.quote(name))
        } else {
            Err(RowLockError::SchemaError(format!(
                "'{}' is not a valid identifier (table '{}')",
                name, self.table
            )))
        }
    }
}

impl Blueprint for SqlBlueprint {
    fn table(&self) -> &str {
        &self.table
    }

    fn boolean(&mut self, column: &str, default: bool) {
        self.commands.push(SchemaCommand::AddBoolean {
            column: column.to_string(),
            default,
        });
    }

    fn unsigned_integer(&mut self, column: &str, nullable: bool) {
        self.commands.push(SchemaCommand::AddUnsignedInteger {
            column: column.to_string(),
            nullable,
        });
    }

    fn foreign(&mut self, key: ForeignKey) {
        self.commands.push(SchemaCommand::AddForeign(key));
    }

    fn drop_foreign(&mut self, name: &str) {
        self.commands.push(SchemaCommand::DropForeign {
            name: name.to_string(),
        });
    }

    fn drop_column(&mut self, column: &str) {
        self.commands.push(SchemaCommand::DropColumn {
            column: column.to_string(),
        });
    }
}
