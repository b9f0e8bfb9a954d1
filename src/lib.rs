//! # sorcerer-showdown
//!
//! Combat resolution and ability-state core for turn-based sorcerer duels.
//!
//! ## Design Principles
//!
//! 1. **Closed Variants**: Domains, techniques, and shikigami are small
//!    tagged enums. No runtime type inspection is needed to find a
//!    Mahoraga or a Shrine technique.
//!
//! 2. **Strict Ownership**: A `Sorcerer` exclusively owns its domain,
//!    technique, and shikigami roster. Nothing is shared between
//!    sorcerers.
//!
//! 3. **Stateless Rules**: `CombatResolver` holds no state. All state lives
//!    in the entities it is handed.
//!
//! ## Resource Policy
//!
//! - Health is unclamped; `health <= 0` means defeated.
//! - Cursed energy may go into debt through `spend_energy`. The checked
//!   `try_spend_energy` refuses to overdraw.
//!
//! ## Modules
//!
//! - `core`: Combatant IDs, `Entity`, errors, construction configs
//! - `domains`: Domains and the sure-hit capability
//! - `techniques`: Technique status machine and unlock gates
//! - `shikigami`: Companions, manifestation, adaptation
//! - `sorcerer`: Sorcerers and their builder
//! - `combat`: Cross-entity rules and the events they report

pub mod core;
pub mod domains;
pub mod techniques;
pub mod shikigami;
pub mod sorcerer;
pub mod combat;

// Re-export commonly used types
pub use crate::core::{
    CombatError, CombatResult, Combatant, CombatantId, Entity, RctConfig, RctCost,
    SorcererConfig,
};

pub use crate::domains::{Domain, DomainKind, SureHit, SureHitOutcome};

pub use crate::techniques::{Technique, TechniqueKind, TechniqueStatus, TechniqueVariant};

pub use crate::shikigami::{
    AdaptationStage, Manifestation, Shikigami, ShikigamiKind, ShikigamiVariant, SupportAmounts,
};

pub use crate::sorcerer::{DomainTick, RctLevel, Sorcerer, SorcererBuilder, Understanding};

pub use crate::combat::{CombatEvent, CombatResolver};
