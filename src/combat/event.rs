//! Events reported by the combat resolver.
//!
//! The resolver never prints anything. It hands these back so the turn
//! loop can narrate, log, or ignore them.

use serde::{Deserialize, Serialize};

use crate::core::CombatantId;
use crate::domains::DomainKind;

/// Something the resolver did (or declined to do).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Two active domains met; both sure-hits are now suppressed.
    DomainClash {
        first: CombatantId,
        second: CombatantId,
    },

    /// A domain's guaranteed hit landed.
    SureHit {
        user: CombatantId,
        target: CombatantId,
        domain: DomainKind,
        damage: f64,
        stunned: bool,
    },

    /// A domain's guaranteed hit was cancelled by a clash.
    SureHitSuppressed {
        user: CombatantId,
        target: CombatantId,
        domain: DomainKind,
    },

    /// A support shikigami healed its summoner and regenerated itself.
    CompanionSupport {
        user: CombatantId,
        shikigami: CombatantId,
        heal: f64,
        regen: f64,
    },

    /// The Shrine finishing move became available.
    WorldCuttingSlashUnlocked {
        user: CombatantId,
        /// The fully adapted shikigami that revealed the technique.
        shikigami: CombatantId,
    },
}

impl CombatEvent {
    /// The sorcerer on whose behalf the event happened.
    #[must_use]
    pub fn user(&self) -> CombatantId {
        match self {
            CombatEvent::DomainClash { first, .. } => *first,
            CombatEvent::SureHit { user, .. }
            | CombatEvent::SureHitSuppressed { user, .. }
            | CombatEvent::CompanionSupport { user, .. }
            | CombatEvent::WorldCuttingSlashUnlocked { user, .. } => *user,
        }
    }
}
