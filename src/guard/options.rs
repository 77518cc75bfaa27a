//! Per-call mutation options.

/// Options passed alongside a single save, update or delete.
///
/// Options are never stored on the record, so they cannot leak into a later
/// operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOptions {
    /// Skip lock enforcement for this operation.
    pub ignore_lock: bool,
}

impl MutationOptions {
    /// Options that skip lock enforcement.
    pub fn ignore_lock() -> Self {
        Self { ignore_lock: true }
    }
}
