//! Shared fixtures for unit tests.

use crate::actor::{Actor, ActorId};
use crate::config::Config;
use crate::record::{Attributes, Record, RecordType};
use crate::repository::{MemoryStore, Repository};
use serde_json::json;
use std::sync::Arc;

/// Actor used throughout the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestUser {
    pub(crate) id: ActorId,
    pub(crate) kind: String,
    pub(crate) system: Option<bool>,
}

impl TestUser {
    pub(crate) fn regular(id: ActorId) -> Self {
        Self {
            id,
            kind: "user".to_string(),
            system: Some(false),
        }
    }

    pub(crate) fn system(id: ActorId) -> Self {
        Self {
            system: Some(true),
            ..Self::regular(id)
        }
    }

    pub(crate) fn without_capability(id: ActorId) -> Self {
        Self {
            system: None,
            ..Self::regular(id)
        }
    }

    pub(crate) fn of_kind(id: ActorId, kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::regular(id)
        }
    }
}

impl Actor for TestUser {
    fn id(&self) -> ActorId {
        self.id
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_system_actor(&self) -> Option<bool> {
        self.system
    }
}

pub(crate) type TestRepository = Repository<MemoryStore<TestUser>, TestUser>;

/// `posts` record type protecting `status`.
pub(crate) fn posts_type() -> Arc<RecordType> {
    Arc::new(
        RecordType::new("posts")
            .with_lockable(["status"])
            .with_fillable(["status", "description"]),
    )
}

/// `notes` record type without lockable attributes.
pub(crate) fn notes_type() -> Arc<RecordType> {
    Arc::new(RecordType::new("notes").with_fillable(["body"]))
}

/// Repository over a memory store that knows users 1 (regular) and 99 (system).
pub(crate) fn repository() -> TestRepository {
    let mut store = MemoryStore::new();
    store.add_actor(TestUser::regular(1));
    store.add_actor(TestUser::system(99));
    Repository::new(store, Config::default())
}

/// Stored post with `status = "A"` and the given lock flag.
pub(crate) fn seed_post(repo: &mut TestRepository, locked: bool) -> Record {
    let mut row = Attributes::new();
    row.insert("status".to_string(), json!("A"));
    row.insert("description".to_string(), json!("draft"));
    row.insert("is_locked".to_string(), json!(locked));
    row.insert(
        "locked_by_id".to_string(),
        if locked { json!(1) } else { json!(null) },
    );
    let key = repo.store_mut().seed("posts", row);
    repo.store()
        .find(posts_type(), key)
        .expect("seeded post should load")
}
