//! Error types for flocksim_core.
//!
//! Configuration and host-input problems are reported through [`SimError`].
//! Per-agent numeric trouble inside a tick is never an error: it is dropped
//! and logged so the rest of the population keeps moving.

use flocksim_data::AgentRole;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for flocksim_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// An agent tunable is out of its valid range.
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// World bounds are empty, inverted, or not finite.
    #[error("Invalid world bounds: {0}")]
    InvalidBounds(String),

    /// Tick delta is negative or not finite.
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f32),

    /// No agent with this id exists in the population.
    #[error("Unknown agent: {0}")]
    UnknownAgent(Uuid),

    /// Operation requires a different role.
    #[error("Agent {id} has role {found:?}, expected {expected:?}")]
    RoleMismatch {
        id: Uuid,
        expected: AgentRole,
        found: AgentRole,
    },

    /// Liveness transition not allowed from the current state.
    #[error("Invalid liveness transition for {id}: {reason}")]
    InvalidTransition { id: Uuid, reason: String },
}

/// Result type alias for flocksim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new invalid parameter error.
    #[must_use]
    pub fn invalid_parameter<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a new invalid bounds error.
    #[must_use]
    pub fn invalid_bounds<S: Into<String>>(msg: S) -> Self {
        Self::InvalidBounds(msg.into())
    }

    /// Creates a new invalid transition error.
    #[must_use]
    pub fn invalid_transition<S: Into<String>>(id: Uuid, reason: S) -> Self {
        Self::InvalidTransition {
            id,
            reason: reason.into(),
        }
    }
}
