//! Actors and the system-actor resolver.
//!
//! An [`Actor`] is whoever performs a mutation. The host passes the current
//! actor, if any, together with the [`ExecutionMode`] in an [`AuthContext`];
//! nothing here reads ambient session state.
//!
//! The [`SystemActorResolver`] decides whether that context is exempt from
//! lock enforcement:
//!
//! 1. Background execution with no authenticated actor is exempt (unless
//!    disabled in config).
//! 2. An actor without the system-actor capability is not exempt.
//! 3. No authenticated actor is not exempt.
//! 4. Otherwise the actor's own `is_system_actor()` answer decides.

use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Primary key of an actor row.
pub type ActorId = u64;

/// Environment variable consulted by [`ExecutionMode::from_env`].
pub const EXECUTION_MODE_ENV: &str = "ROWLOCK_EXECUTION_MODE";

/// Identity performing a mutation.
pub trait Actor {
    /// Primary key referenced by the `locked_by` column.
    fn id(&self) -> ActorId;

    /// Kind descriptor, compared against `actor.kind` in config when locking.
    fn kind(&self) -> &str;

    /// System-actor capability.
    ///
    /// `None` means the actor type has no notion of system actors, which is
    /// treated the same as `Some(false)`.
    fn is_system_actor(&self) -> Option<bool> {
        None
    }
}

impl<T: Actor + ?Sized> Actor for &T {
    fn id(&self) -> ActorId {
        (**self).id()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn is_system_actor(&self) -> Option<bool> {
        (**self).is_system_actor()
    }
}

/// Whether the current operation runs on behalf of a request or as a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Request-bound execution where an actor is expected.
    #[default]
    Interactive,
    /// Console commands, queue workers and other maintenance jobs.
    Background,
}

impl ExecutionMode {
    /// Parse an execution mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" | "request" | "http" => Some(Self::Interactive),
            "background" | "console" | "job" | "cli" => Some(Self::Background),
            _ => None,
        }
    }

    /// Read the mode from `ROWLOCK_EXECUTION_MODE`.
    ///
    /// Unset or unrecognised values mean interactive.
    pub fn from_env() -> Self {
        std::env::var(EXECUTION_MODE_ENV)
            .ok()
            .and_then(|value| Self::from_str(&value))
            .unwrap_or_default()
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }
}

/// The caller of a mutation: current actor and execution mode.
#[derive(Debug)]
pub struct AuthContext<'a, A> {
    actor: Option<&'a A>,
    mode: ExecutionMode,
}

impl<A> Clone for AuthContext<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for AuthContext<'_, A> {}

impl<'a, A: Actor> AuthContext<'a, A> {
    pub fn new(actor: Option<&'a A>, mode: ExecutionMode) -> Self {
        Self { actor, mode }
    }

    /// Interactive request performed by `actor`.
    pub fn interactive(actor: &'a A) -> Self {
        Self::new(Some(actor), ExecutionMode::Interactive)
    }

    /// Interactive request with nobody authenticated.
    pub fn guest() -> Self {
        Self::new(None, ExecutionMode::Interactive)
    }

    /// Background job with nobody authenticated.
    pub fn background() -> Self {
        Self::new(None, ExecutionMode::Background)
    }

    pub fn actor(&self) -> Option<&'a A> {
        self.actor
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

/// Decides whether an [`AuthContext`] bypasses lock enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemActorResolver {
    exempt_background: bool,
}

impl Default for SystemActorResolver {
    fn default() -> Self {
        Self {
            exempt_background: true,
        }
    }
}

impl SystemActorResolver {
    pub fn new(exempt_background: bool) -> Self {
        Self { exempt_background }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.exempt_background)
    }

    /// Whether the context is exempt from lock enforcement.
    pub fn is_exempt<A: Actor>(&self, ctx: &AuthContext<'_, A>) -> bool {
        if self.exempt_background && ctx.mode().is_background() && ctx.actor().is_none() {
            return true;
        }

        match ctx.actor() {
            None => false,
            Some(actor) => actor.is_system_actor().unwrap_or(false),
        }
    }
}
