//! Construction-time configuration.
//!
//! Sorcerers are built from a `SorcererConfig`:
//! - starting health and cursed energy
//! - the domain they own and its turn limit
//! - an optional technique
//!
//! The presets `SorcererConfig::gojo()` and `SorcererConfig::sukuna()`
//! mirror the two reference archetypes. Configs are plain data and can be
//! deserialized, but nothing here reads files.

use serde::{Deserialize, Serialize};

use crate::domains::DomainKind;
use crate::sorcerer::RctLevel;
use crate::techniques::TechniqueKind;

/// Turns a domain stays up after activation.
pub const DEFAULT_DOMAIN_LIMIT: u32 = 5;

/// Starting stats and abilities of a sorcerer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SorcererConfig {
    /// Human-readable name (for logs and display).
    pub name: String,

    pub health: f64,

    pub cursed_energy: f64,

    pub domain: DomainKind,

    /// Turns the domain lasts once activated.
    #[serde(default = "default_domain_limit")]
    pub domain_limit: u32,

    #[serde(default)]
    pub technique: Option<TechniqueKind>,

    #[serde(default)]
    pub rct: RctConfig,
}

fn default_domain_limit() -> u32 {
    DEFAULT_DOMAIN_LIMIT
}

impl SorcererConfig {
    /// Create a config with no technique and the default domain limit.
    pub fn new(name: impl Into<String>, health: f64, cursed_energy: f64, domain: DomainKind) -> Self {
        Self {
            name: name.into(),
            health,
            cursed_energy,
            domain,
            domain_limit: DEFAULT_DOMAIN_LIMIT,
            technique: None,
            rct: RctConfig::default(),
        }
    }

    /// The Limitless user: 400 health, 4000 cursed energy, Infinite Void.
    #[must_use]
    pub fn gojo() -> Self {
        Self::new("Gojo", 400.0, 4000.0, DomainKind::InfiniteVoid)
            .with_technique(TechniqueKind::Limitless)
    }

    /// The Shrine user: 500 health, 12000 cursed energy, Malevolent Shrine.
    #[must_use]
    pub fn sukuna() -> Self {
        Self::new("Sukuna", 500.0, 12000.0, DomainKind::MalevolentShrine)
            .with_technique(TechniqueKind::Shrine)
    }

    #[must_use]
    pub fn with_technique(mut self, technique: TechniqueKind) -> Self {
        self.technique = Some(technique);
        self
    }

    #[must_use]
    pub fn with_domain_limit(mut self, turns: u32) -> Self {
        self.domain_limit = turns;
        self
    }

    #[must_use]
    pub fn with_rct(mut self, rct: RctConfig) -> Self {
        self.rct = rct;
        self
    }
}

/// Heal amount and cursed-energy cost of one reverse cursed technique use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RctCost {
    pub heal: f64,
    pub energy: f64,
}

/// Reverse cursed technique tuning per level.
///
/// `Disabled` always heals nothing for free.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RctConfig {
    pub active: RctCost,
    pub overdrive: RctCost,
}

impl Default for RctConfig {
    fn default() -> Self {
        Self {
            active: RctCost {
                heal: 25.0,
                energy: 50.0,
            },
            overdrive: RctCost {
                heal: 60.0,
                energy: 150.0,
            },
        }
    }
}

impl RctConfig {
    /// Cost of one use at `level`, `None` when disabled.
    #[must_use]
    pub fn cost(&self, level: RctLevel) -> Option<RctCost> {
        match level {
            RctLevel::Disabled => None,
            RctLevel::Active => Some(self.active),
            RctLevel::Overdrive => Some(self.overdrive),
        }
    }
}
