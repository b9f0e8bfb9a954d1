//! Combatant identity and the shared resource holder.
//!
//! Every Sorcerer and Shikigami carries a `CombatantId` and owns exactly
//! one `Entity` with its health, cursed energy, and stun flag.
//!
//! ## Resource Policy
//!
//! - Health is **not** clamped. A combatant whose health drops to zero or
//!   below is *defeated*; deciding what that means is up to the turn loop.
//! - Cursed energy may go negative. `spend_energy` records a debt,
//!   `try_spend_energy` refuses to overdraw.
//!
//! ```
//! use sorcerer_showdown::core::Entity;
//!
//! let mut entity = Entity::new(100.0, 50.0);
//! entity.damage(120.0);
//! assert!(entity.is_defeated());
//!
//! entity.spend_energy(80.0);
//! assert!(entity.in_energy_debt());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{CombatError, CombatResult};

/// Unique identifier for a combatant (sorcerer or shikigami).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Create a new combatant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CombatantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combatant({})", self.0)
    }
}

/// Anything that owns an `Entity` and can be targeted in combat.
pub trait Combatant {
    /// Get this combatant's id.
    fn combatant_id(&self) -> CombatantId;

    /// Get the owned resource holder.
    fn entity(&self) -> &Entity;

    /// Get the owned resource holder mutably.
    fn entity_mut(&mut self) -> &mut Entity;
}

/// Health, cursed energy, and stun state of a single combatant.
///
/// All mutators are plain arithmetic. Amounts are expected to be
/// non-negative; nothing here checks that except `try_spend_energy`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    health: f64,
    cursed_energy: f64,
    stunned: bool,
}

impl Entity {
    /// Create an entity with starting health and cursed energy.
    #[must_use]
    pub fn new(health: f64, cursed_energy: f64) -> Self {
        Self {
            health,
            cursed_energy,
            stunned: false,
        }
    }

    /// Get current health. May be zero or negative.
    #[must_use]
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Get current cursed energy. Negative while in debt.
    #[must_use]
    pub fn cursed_energy(&self) -> f64 {
        self.cursed_energy
    }

    /// Is the stun flag set?
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    /// Subtract `amount` from health. No floor is applied.
    pub fn damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Add `amount` to health. No ceiling is applied.
    pub fn heal(&mut self, amount: f64) {
        self.health += amount;
    }

    /// Debit cursed energy unconditionally.
    ///
    /// Overdrawing leaves the pool negative (see `in_energy_debt`).
    /// Use `try_spend_energy` when the debit must be covered.
    pub fn spend_energy(&mut self, amount: f64) {
        self.cursed_energy -= amount;
    }

    /// Debit cursed energy only if the pool covers it.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative or not finite.
    /// - `InsufficientEnergy` if the pool holds less than `amount`.
    ///   The pool is left untouched.
    pub fn try_spend_energy(&mut self, amount: f64) -> CombatResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CombatError::InvalidAmount(amount));
        }
        if self.cursed_energy < amount {
            return Err(CombatError::InsufficientEnergy {
                required: amount,
                available: self.cursed_energy,
            });
        }
        self.cursed_energy -= amount;
        Ok(())
    }

    /// Add `amount` to cursed energy. No ceiling is applied.
    pub fn restore_energy(&mut self, amount: f64) {
        self.cursed_energy += amount;
    }

    /// Set or clear the stun flag.
    pub fn set_stunned(&mut self, stunned: bool) {
        self.stunned = stunned;
    }

    /// Health has reached zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Cursed energy has been overdrawn.
    #[must_use]
    pub fn in_energy_debt(&self) -> bool {
        self.cursed_energy < 0.0
    }
}
