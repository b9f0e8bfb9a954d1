//! Domain state and sure-hit resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CombatError, CombatResult, Entity};

/// Starting durability of every domain.
pub const DOMAIN_HEALTH: f64 = 200.0;

/// Range every domain is cast with. Never mutated.
pub const BASE_RANGE: f64 = 15.0;

/// Sure-hit damage of Infinite Void at base range.
pub const INFINITE_VOID_BRAIN_DAMAGE: f64 = 30.0;

/// Sure-hit damage of Malevolent Shrine at base range.
pub const MALEVOLENT_SHRINE_SLASH_DAMAGE: f64 = 75.0;

/// The closed set of domain variants.
///
/// Each variant carries its own sure-hit constants through the
/// accessor methods below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainKind {
    /// Floods the target with information: brain damage plus stun.
    InfiniteVoid,
    /// Continuous slashing: heavy damage, no stun.
    MalevolentShrine,
}

impl DomainKind {
    /// Sure-hit damage at a range multiplier of 1.0.
    #[must_use]
    pub const fn sure_hit_damage(self) -> f64 {
        match self {
            DomainKind::InfiniteVoid => INFINITE_VOID_BRAIN_DAMAGE,
            DomainKind::MalevolentShrine => MALEVOLENT_SHRINE_SLASH_DAMAGE,
        }
    }

    /// Does the sure-hit stun its target?
    #[must_use]
    pub const fn stuns(self) -> bool {
        matches!(self, DomainKind::InfiniteVoid)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DomainKind::InfiniteVoid => "Infinite Void",
            DomainKind::MalevolentShrine => "Malevolent Shrine",
        }
    }
}

impl std::fmt::Display for DomainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a landed sure-hit did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SureHitOutcome {
    /// Health removed from the target.
    pub damage: f64,
    /// Whether the target was stunned.
    pub stunned: bool,
}

/// Capability of applying a guaranteed-hit effect to a target.
pub trait SureHit {
    /// Apply the sure-hit effect to `target`.
    ///
    /// Returns `None` without touching the target while the domain is
    /// clashing.
    fn on_sure_hit(&self, target: &mut Entity) -> Option<SureHitOutcome>;
}

/// A bounded-area ability owned by one sorcerer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Domain {
    kind: DomainKind,
    domain_health: f64,
    base_range: f64,
    current_range: f64,
    clashing: bool,
}

impl Domain {
    /// Create a domain at base range, not clashing.
    #[must_use]
    pub fn new(kind: DomainKind) -> Self {
        Self {
            kind,
            domain_health: DOMAIN_HEALTH,
            base_range: BASE_RANGE,
            current_range: BASE_RANGE,
            clashing: false,
        }
    }

    /// Get the domain variant.
    #[must_use]
    pub fn kind(&self) -> DomainKind {
        self.kind
    }

    /// Get the domain's durability.
    #[must_use]
    pub fn domain_health(&self) -> f64 {
        self.domain_health
    }

    /// Get the cast range.
    #[must_use]
    pub fn base_range(&self) -> f64 {
        self.base_range
    }

    /// Get the range in effect now.
    #[must_use]
    pub fn current_range(&self) -> f64 {
        self.current_range
    }

    /// `current_range / base_range`. 1.0 until the range is altered.
    #[must_use]
    pub fn range_multiplier(&self) -> f64 {
        self.current_range / self.base_range
    }

    /// Is this domain locked in a clash? Sure-hits are suppressed while it is.
    #[must_use]
    pub fn is_clashing(&self) -> bool {
        self.clashing
    }

    /// Mark this domain as clashing (or not) with another active domain.
    pub fn set_clash_state(&mut self, clashing: bool) {
        if self.clashing != clashing {
            debug!(domain = %self.kind, clashing, "domain clash state changed");
        }
        self.clashing = clashing;
    }

    /// Expand or shrink the domain.
    ///
    /// # Errors
    ///
    /// `InvalidRange` unless `range` is positive and finite.
    pub fn set_current_range(&mut self, range: f64) -> CombatResult<()> {
        if !range.is_finite() || range <= 0.0 {
            return Err(CombatError::InvalidRange(range));
        }
        self.current_range = range;
        Ok(())
    }

    /// Return to base range.
    pub fn reset_range(&mut self) {
        self.current_range = self.base_range;
    }
}

impl SureHit for Domain {
    fn on_sure_hit(&self, target: &mut Entity) -> Option<SureHitOutcome> {
        if self.clashing {
            return None;
        }

        let damage = self.kind.sure_hit_damage() * self.range_multiplier();
        target.damage(damage);

        let stunned = self.kind.stuns();
        if stunned {
            target.set_stunned(true);
        }

        Some(SureHitOutcome { damage, stunned })
    }
}
