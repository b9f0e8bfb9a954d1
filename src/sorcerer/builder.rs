//! Sorcerer construction.

use smallvec::SmallVec;

use super::state::{RctLevel, Sorcerer, Understanding};
use crate::core::{CombatantId, Entity, RctConfig, SorcererConfig};
use crate::domains::{Domain, DomainKind};
use crate::shikigami::Shikigami;
use crate::techniques::{Technique, TechniqueKind};

/// Builder for a `Sorcerer`.
///
/// Start from a preset config and inject any pre-built shikigami:
///
/// ```
/// use sorcerer_showdown::core::{CombatantId, SorcererConfig};
/// use sorcerer_showdown::shikigami::Shikigami;
/// use sorcerer_showdown::sorcerer::SorcererBuilder;
///
/// let sukuna = SorcererBuilder::from_config(CombatantId(1), SorcererConfig::sukuna())
///     .with_shikigami(Shikigami::mahoraga(CombatantId(2)))
///     .build();
///
/// assert_eq!(sukuna.shikigami().len(), 1);
/// assert!(sukuna.holds_unlock_gated_technique());
/// ```
pub struct SorcererBuilder {
    id: CombatantId,
    config: SorcererConfig,
    shikigami: Vec<Shikigami>,
}

impl SorcererBuilder {
    /// Start from scratch with a name, resources, and a domain.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        health: f64,
        cursed_energy: f64,
        domain: DomainKind,
    ) -> Self {
        Self::from_config(id, SorcererConfig::new(name, health, cursed_energy, domain))
    }

    pub fn from_config(id: CombatantId, config: SorcererConfig) -> Self {
        Self {
            id,
            config,
            shikigami: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_technique(mut self, technique: TechniqueKind) -> Self {
        self.config.technique = Some(technique);
        self
    }

    #[must_use]
    pub fn without_technique(mut self) -> Self {
        self.config.technique = None;
        self
    }

    #[must_use]
    pub fn with_domain_limit(mut self, turns: u32) -> Self {
        self.config.domain_limit = turns;
        self
    }

    #[must_use]
    pub fn with_rct_config(mut self, rct: RctConfig) -> Self {
        self.config.rct = rct;
        self
    }

    /// Append a shikigami to the roster. Order is preserved.
    #[must_use]
    pub fn with_shikigami(mut self, shikigami: Shikigami) -> Self {
        self.shikigami.push(shikigami);
        self
    }

    pub fn build(self) -> Sorcerer {
        let SorcererConfig {
            name,
            health,
            cursed_energy,
            domain,
            domain_limit,
            technique,
            rct,
        } = self.config;

        Sorcerer {
            id: self.id,
            name,
            entity: Entity::new(health, cursed_energy),
            domain: Domain::new(domain),
            technique: technique.map(Technique::new),
            shikigami: SmallVec::from_vec(self.shikigami),
            domain_active: false,
            domain_limit,
            domain_turns_remaining: 0,
            rct: RctLevel::Disabled,
            rct_config: rct,
            domain_amplification_active: false,
            understanding: Understanding::None,
        }
    }
}

impl Sorcerer {
    /// Preset Infinite Void user with no shikigami.
    #[must_use]
    pub fn gojo(id: CombatantId) -> Self {
        SorcererBuilder::from_config(id, SorcererConfig::gojo()).build()
    }

    /// Preset Malevolent Shrine user with no shikigami.
    #[must_use]
    pub fn sukuna(id: CombatantId) -> Self {
        SorcererBuilder::from_config(id, SorcererConfig::sukuna()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shikigami::ShikigamiKind;

    #[test]
    fn test_build_from_scratch() {
        let sorcerer = SorcererBuilder::new(CombatantId(5), "Custom", 250.0, 800.0, DomainKind::InfiniteVoid)
            .with_technique(TechniqueKind::Shrine)
            .with_domain_limit(3)
            .build();

        assert_eq!(sorcerer.id(), CombatantId(5));
        assert_eq!(sorcerer.name(), "Custom");
        assert_eq!(sorcerer.health(), 250.0);
        assert_eq!(sorcerer.cursed_energy(), 800.0);
        assert_eq!(sorcerer.domain_limit(), 3);
        assert_eq!(sorcerer.technique().unwrap().kind(), TechniqueKind::Shrine);
    }

    #[test]
    fn test_roster_order_preserved() {
        let sorcerer = SorcererBuilder::from_config(CombatantId(1), SorcererConfig::gojo())
            .with_shikigami(Shikigami::agito(CombatantId(2)))
            .with_shikigami(Shikigami::mahoraga(CombatantId(3)))
            .with_shikigami(Shikigami::agito(CombatantId(4)))
            .build();

        let kinds: Vec<_> = sorcerer.shikigami().iter().map(Shikigami::kind).collect();
        assert_eq!(
            kinds,
            vec![ShikigamiKind::Agito, ShikigamiKind::Mahoraga, ShikigamiKind::Agito]
        );
    }

    #[test]
    fn test_without_technique() {
        let sorcerer = SorcererBuilder::from_config(CombatantId(1), SorcererConfig::sukuna())
            .without_technique()
            .build();
        assert!(!sorcerer.has_technique());
        assert!(!sorcerer.holds_unlock_gated_technique());
    }

    #[test]
    fn test_presets() {
        let gojo = Sorcerer::gojo(CombatantId(1));
        assert_eq!(gojo.domain().kind(), DomainKind::InfiniteVoid);
        assert_eq!(gojo.health(), 400.0);

        let sukuna = Sorcerer::sukuna(CombatantId(2));
        assert_eq!(sukuna.domain().kind(), DomainKind::MalevolentShrine);
        assert_eq!(sukuna.cursed_energy(), 12000.0);
    }
}
