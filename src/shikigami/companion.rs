//! Summonable companions and their manifestation state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::adaptation::AdaptationStage;
use crate::core::{Combatant, CombatantId, Entity};

pub const MAHORAGA_HEALTH: f64 = 500.0;
pub const AGITO_HEALTH: f64 = 200.0;

/// Health Agito restores to its summoner when the turn loop applies support.
pub const AGITO_SUPPORT_HEAL: f64 = 40.0;
/// Per-turn regeneration Agito grants while active.
pub const AGITO_SUPPORT_REGEN: f64 = 15.0;

/// Summon strength of a shikigami.
///
/// Any state can be entered from any other; there is no decay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manifestation {
    /// Unsummoned.
    #[default]
    Shadow,
    PartialManifestation,
    Manifested,
}

/// Variant selector used by construction configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShikigamiKind {
    Mahoraga,
    Agito,
}

impl ShikigamiKind {
    /// Starting health of this kind.
    #[must_use]
    pub const fn base_health(self) -> f64 {
        match self {
            ShikigamiKind::Mahoraga => MAHORAGA_HEALTH,
            ShikigamiKind::Agito => AGITO_HEALTH,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShikigamiKind::Mahoraga => "Mahoraga",
            ShikigamiKind::Agito => "Agito",
        }
    }
}

/// Variant-specific shikigami data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ShikigamiVariant {
    /// Adapts to whatever it faces the longer it stays active.
    Mahoraga { adaptation: AdaptationStage },
    /// Passive support; see `AGITO_SUPPORT_HEAL` and `AGITO_SUPPORT_REGEN`.
    Agito,
}

/// Passive support a shikigami offers its summoner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportAmounts {
    pub heal: f64,
    pub regen: f64,
}

/// A summonable companion entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shikigami {
    id: CombatantId,
    entity: Entity,
    manifestation: Manifestation,
    active_turns: u32,
    variant: ShikigamiVariant,
}

impl Shikigami {
    /// Create a shikigami in its shadow, with no active time.
    #[must_use]
    pub fn new(id: CombatantId, kind: ShikigamiKind) -> Self {
        let variant = match kind {
            ShikigamiKind::Mahoraga => ShikigamiVariant::Mahoraga {
                adaptation: AdaptationStage::None,
            },
            ShikigamiKind::Agito => ShikigamiVariant::Agito,
        };
        Self {
            id,
            entity: Entity::new(kind.base_health(), 0.0),
            manifestation: Manifestation::Shadow,
            active_turns: 0,
            variant,
        }
    }

    /// Shorthand for `Shikigami::new(id, ShikigamiKind::Mahoraga)`.
    #[must_use]
    pub fn mahoraga(id: CombatantId) -> Self {
        Self::new(id, ShikigamiKind::Mahoraga)
    }

    /// Shorthand for `Shikigami::new(id, ShikigamiKind::Agito)`.
    #[must_use]
    pub fn agito(id: CombatantId) -> Self {
        Self::new(id, ShikigamiKind::Agito)
    }

    /// Get the combatant id.
    #[must_use]
    pub fn id(&self) -> CombatantId {
        self.id
    }

    /// Get the kind this shikigami was summoned as.
    #[must_use]
    pub fn kind(&self) -> ShikigamiKind {
        match self.variant {
            ShikigamiVariant::Mahoraga { .. } => ShikigamiKind::Mahoraga,
            ShikigamiVariant::Agito => ShikigamiKind::Agito,
        }
    }

    /// Display name of the kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get the variant data.
    #[must_use]
    pub fn variant(&self) -> &ShikigamiVariant {
        &self.variant
    }

    /// Get the resource holder.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Get the resource holder mutably.
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    // === Manifestation ===

    /// Get the current summon strength.
    #[must_use]
    pub fn manifestation(&self) -> Manifestation {
        self.manifestation
    }

    /// Move to any manifestation level.
    pub fn set_manifestation(&mut self, manifestation: Manifestation) {
        if self.manifestation != manifestation {
            debug!(shikigami = self.name(), id = %self.id, from = ?self.manifestation, to = ?manifestation, "manifestation changed");
        }
        self.manifestation = manifestation;
    }

    /// Summon partially. Counts as active.
    pub fn partially_manifest(&mut self) {
        self.set_manifestation(Manifestation::PartialManifestation);
    }

    /// Summon fully.
    pub fn manifest(&mut self) {
        self.set_manifestation(Manifestation::Manifested);
    }

    /// Return to the shadow. Active time is kept.
    pub fn withdraw(&mut self) {
        self.set_manifestation(Manifestation::Shadow);
    }

    /// Partially or fully manifested.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.manifestation != Manifestation::Shadow
    }

    // === Active time ===

    /// Turns spent partially or fully manifested.
    #[must_use]
    pub fn active_turns(&self) -> u32 {
        self.active_turns
    }

    /// Count one turn of active time. No-op while in the shadow.
    ///
    /// The turn loop must call this at most once per turn.
    pub fn increment_active_time(&mut self) {
        if self.is_active() {
            self.active_turns = self.active_turns.saturating_add(1);
        }
    }

    /// Forget all accumulated active time. Adaptation follows on the next `adapt`.
    pub fn reset_active_turns(&mut self) {
        self.active_turns = 0;
    }

    // === Adaptation ===

    /// Recompute the adaptation stage from the current active time.
    ///
    /// Returns the new stage, or `None` for shikigami that do not adapt.
    pub fn adapt(&mut self) -> Option<AdaptationStage> {
        let active_turns = self.active_turns;
        match &mut self.variant {
            ShikigamiVariant::Mahoraga { adaptation } => {
                let stage = AdaptationStage::from_active_turns(active_turns);
                let previous = *adaptation;
                if previous != stage {
                    debug!(id = %self.id, from = ?previous, to = ?stage, active_turns, "adaptation stage changed");
                }
                *adaptation = stage;
                Some(stage)
            }
            ShikigamiVariant::Agito => None,
        }
    }

    /// Current stage for adaptive shikigami, `None` otherwise.
    #[must_use]
    pub fn adaptation_stage(&self) -> Option<AdaptationStage> {
        match self.variant {
            ShikigamiVariant::Mahoraga { adaptation } => Some(adaptation),
            ShikigamiVariant::Agito => None,
        }
    }

    /// Has this shikigami reached full adaptation (the fourth spin)?
    #[must_use]
    pub fn fully_adapted_to_infinity(&self) -> bool {
        self.adaptation_stage().is_some_and(AdaptationStage::is_full)
    }

    /// Passive support offered to the summoner, if any.
    #[must_use]
    pub fn support(&self) -> Option<SupportAmounts> {
        match self.variant {
            ShikigamiVariant::Agito => Some(SupportAmounts {
                heal: AGITO_SUPPORT_HEAL,
                regen: AGITO_SUPPORT_REGEN,
            }),
            ShikigamiVariant::Mahoraga { .. } => None,
        }
    }
}

impl Combatant for Shikigami {
    fn combatant_id(&self) -> CombatantId {
        self.id
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
