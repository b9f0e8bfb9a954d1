//! Errors raised by the checked combat operations.
//!
//! The unconditional mutators (`damage`, `heal`, `spend_energy`, ...)
//! never fail. Only their checked counterparts return `CombatResult`.

/// Error returned by checked combat operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CombatError {
    /// The cursed energy pool cannot cover the debit.
    #[error("insufficient cursed energy: required {required}, available {available}")]
    InsufficientEnergy { required: f64, available: f64 },

    /// Amount was negative or not finite.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// Domain range must be positive and finite.
    #[error("invalid domain range: {0}")]
    InvalidRange(f64),
}

pub type CombatResult<T> = Result<T, CombatError>;
