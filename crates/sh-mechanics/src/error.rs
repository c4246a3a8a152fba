//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A pool cannot cover the cost of a rejecting spend. Nothing was mutated.
    #[error("insufficient {resource}: need {needed}, have {available}")]
    InsufficientFunds {
        /// Name of the pool that was charged (e.g., "style", "mp").
        resource: String,
        /// Cost that was requested.
        needed: i32,
        /// Value of the pool at the time of the request.
        available: i32,
    },

    /// A skill key does not name one of the known skills.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An attribute key does not name one of the three attributes.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A style action key does not name a configured action.
    #[error("unknown style action: {0}")]
    UnknownAction(String),

    /// The ruleset configuration is malformed.
    #[error("invalid ruleset config: {0}")]
    InvalidConfig(String),

    /// A dice formula string could not be parsed.
    #[error("invalid dice formula: {0}")]
    InvalidFormula(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
