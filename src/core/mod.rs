//! Core types: combatant identity, resources, errors, configuration.
//!
//! Everything else in the crate builds on `Entity`, the shared holder of
//! health, cursed energy, and stun state.

pub mod config;
pub mod entity;
pub mod error;

pub use config::{RctConfig, RctCost, SorcererConfig, DEFAULT_DOMAIN_LIMIT};
pub use entity::{Combatant, CombatantId, Entity};
pub use error::{CombatError, CombatResult};
