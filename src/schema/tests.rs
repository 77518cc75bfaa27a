//! Tests for the schema helper.

use super::*;
use crate::config::{Config, ReferentialAction};

fn lockable_posts(config: &Config) -> SqlBlueprint {
    let mut table = SqlBlueprint::new("posts");
    lockable(&mut table, config).unwrap();
    table
}

#[test]
fn test_lockable_records_columns_then_foreign_key() {
    let table = lockable_posts(&Config::default());

    assert_eq!(
        table.commands(),
        [
            SchemaCommand::AddBoolean {
                column: "is_locked".to_string(),
                default: false,
            },
            SchemaCommand::AddUnsignedInteger {
                column: "locked_by_id".to_string(),
                nullable: true,
            },
            SchemaCommand::AddForeign(ForeignKey {
                name: "posts_locked_by_id_foreign".to_string(),
                column: "locked_by_id".to_string(),
                references_table: "users".to_string(),
                references_column: "id".to_string(),
                on_delete: ReferentialAction::Restrict,
            }),
        ]
    );
}

#[test]
fn test_drop_lockable_drops_foreign_key_first() {
    let mut table = SqlBlueprint::new("posts");
    drop_lockable(&mut table, &Config::default()).unwrap();

    assert_eq!(
        table.commands(),
        [
            SchemaCommand::DropForeign {
                name: "posts_locked_by_id_foreign".to_string(),
            },
            SchemaCommand::DropColumn {
                column: "locked_by_id".to_string(),
            },
            SchemaCommand::DropColumn {
                column: "is_locked".to_string(),
            },
        ]
    );
}

#[test]
fn test_foreign_key_name_follows_table() {
    assert_eq!(
        foreign_key_name("comments", "locked_by_id"),
        "comments_locked_by_id_foreign"
    );
}

#[test]
fn test_lockable_mysql_sql() {
    let sql = lockable_posts(&Config::default())
        .to_sql(Dialect::Mysql)
        .unwrap();

    assert_eq!(
        sql,
        vec![
            "ALTER TABLE `posts` ADD `is_locked` TINYINT(1) NOT NULL DEFAULT 0;",
            "ALTER TABLE `posts` ADD `locked_by_id` INT UNSIGNED NULL DEFAULT NULL;",
            "ALTER TABLE `posts` ADD CONSTRAINT `posts_locked_by_id_foreign` FOREIGN KEY (`locked_by_id`) REFERENCES `users` (`id`) ON DELETE RESTRICT;",
        ]
    );
}

#[test]
fn test_lockable_postgres_sql_uses_configured_actor_table() {
    let mut config = Config::default();
    config.actor.table = "accounts".to_string();
    config.actor.primary_key = "account_id".to_string();
    config.on_delete = ReferentialAction::SetNull;

    let sql = lockable_posts(&config).to_sql(Dialect::Postgres).unwrap();

    assert_eq!(
        sql,
        vec![
            "ALTER TABLE \"posts\" ADD COLUMN \"is_locked\" BOOLEAN NOT NULL DEFAULT FALSE;",
            "ALTER TABLE \"posts\" ADD COLUMN \"locked_by_id\" INTEGER NULL DEFAULT NULL;",
            "ALTER TABLE \"posts\" ADD CONSTRAINT \"posts_locked_by_id_foreign\" FOREIGN KEY (\"locked_by_id\") REFERENCES \"accounts\" (\"account_id\") ON DELETE SET NULL;",
        ]
    );
}

#[test]
fn test_drop_lockable_sql_per_dialect() {
    let mut table = SqlBlueprint::new("posts");
    drop_lockable(&mut table, &Config::default()).unwrap();

    assert_eq!(
        table.to_sql(Dialect::Mysql).unwrap(),
        vec![
            "ALTER TABLE `posts` DROP FOREIGN KEY `posts_locked_by_id_foreign`;",
            "ALTER TABLE `posts` DROP COLUMN `locked_by_id`;",
            "ALTER TABLE `posts` DROP COLUMN `is_locked`;",
        ]
    );
    assert_eq!(
        table.to_sql(Dialect::Postgres).unwrap()[0],
        "ALTER TABLE \"posts\" DROP CONSTRAINT \"posts_locked_by_id_foreign\";"
    );
}

#[test]
fn test_to_script_joins_statements() {
    let script = lockable_posts(&Config::default())
        .to_script(Dialect::Mysql)
        .unwrap();

    assert_eq!(script.lines().count(), 3);
    assert!(script.ends_with(";\n"));
}

#[test]
fn test_lockable_rejects_invalid_table_name() {
    let mut table = SqlBlueprint::new("posts;--");

    let err = lockable(&mut table, &Config::default()).unwrap_err();

    assert!(matches!(err, crate::error::RowLockError::SchemaError(_)));
    assert!(table.commands().is_empty());
}

#[test]
fn test_lockable_rejects_table_whose_foreign_key_name_is_too_long() {
    let long_table = "t".repeat(50);
    let mut table = SqlBlueprint::new(long_table.as_str());

    let err = lockable(&mut table, &Config::default()).unwrap_err();

    assert!(matches!(err, crate::error::RowLockError::SchemaError(_)));
    assert!(err.to_string().contains(&format!("table name '{}' is too long", long_table)));
    assert!(table.commands().is_empty());

    let err = drop_lockable(&mut table, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("too long"));
    assert!(table.commands().is_empty());
}

#[test]
fn test_lockable_accepts_longest_table_that_fits() {
    // "_locked_by_id_foreign" adds 21 characters.
    let table_name = "t".repeat(42);
    let mut table = SqlBlueprint::new(table_name.as_str());

    lockable(&mut table, &Config::default()).unwrap();

    assert_eq!(table.to_sql(Dialect::Postgres).unwrap().len(), 3);
}

#[test]
fn test_dialect_from_str() {
    assert_eq!(Dialect::from_str("MySQL"), Some(Dialect::Mysql));
    assert_eq!(Dialect::from_str("postgresql"), Some(Dialect::Postgres));
    assert_eq!(Dialect::from_str("sqlite"), None);
    assert_eq!(Dialect::Postgres.as_str(), "postgres");
}
