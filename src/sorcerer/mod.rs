//! Sorcerers: the top-level combatants.
//!
//! A `Sorcerer` exclusively owns:
//! - one `Entity` (health, cursed energy, stun)
//! - one `Domain`, plus its activation state and turn budget
//! - zero or one `Technique`
//! - an ordered roster of `Shikigami`
//!
//! It also owns the reverse cursed technique level and tracks domain
//! amplification. Construct sorcerers with `SorcererBuilder`.

mod builder;
mod state;

pub use builder::SorcererBuilder;
pub use state::{DomainTick, RctLevel, ShikigamiRoster, Sorcerer, Understanding};
