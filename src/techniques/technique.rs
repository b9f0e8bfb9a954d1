//! Technique status machine and variant data.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base output of the Shrine technique (Dismantle / Cleave).
pub const SHRINE_BASE_OUTPUT: f64 = 40.0;

/// Base output of the Limitless technique (Blue / Red).
pub const LIMITLESS_BASE_OUTPUT: f64 = 35.0;

/// Output multiplier while boosted by an active domain.
pub const DOMAIN_BOOST_MULTIPLIER: f64 = 1.5;

/// Usability state of a technique.
///
/// `Usable -> DomainBoost -> BurntOut`, and `BurntOut -> Usable` on
/// restore. Nothing inside the technique moves between states on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechniqueStatus {
    #[default]
    Usable,
    DomainBoost,
    BurntOut,
}

/// Variant selector used by construction configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechniqueKind {
    Limitless,
    Shrine,
}

impl TechniqueKind {
    /// Base output of a fresh technique of this kind.
    #[must_use]
    pub const fn base_output(self) -> f64 {
        match self {
            TechniqueKind::Limitless => LIMITLESS_BASE_OUTPUT,
            TechniqueKind::Shrine => SHRINE_BASE_OUTPUT,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TechniqueKind::Limitless => "Limitless",
            TechniqueKind::Shrine => "Shrine",
        }
    }
}

/// Variant-specific technique data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TechniqueVariant {
    Limitless,
    /// Carries the finishing-move gate. Only the combat resolver opens it.
    Shrine { world_cutting_slash_allowed: bool },
}

/// A named ability owned by one sorcerer.
///
/// Status moves freely, but the Shrine finishing-move gate is closed from
/// outside the crate. It cannot be opened directly:
///
/// ```compile_fail
/// use sorcerer_showdown::techniques::{Technique, TechniqueKind};
///
/// let mut shrine = Technique::new(TechniqueKind::Shrine);
/// shrine.allow_world_cutting_slash();
/// ```
///
/// nor smuggled in pre-opened through serde:
///
/// ```compile_fail
/// use sorcerer_showdown::techniques::Technique;
///
/// let json = r#"{"status":"Usable","base_output":40.0,"variant":{"Shrine":{"world_cutting_slash_allowed":true}}}"#;
/// let shrine: Technique = serde_json::from_str(json).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Technique {
    status: TechniqueStatus,
    base_output: f64,
    variant: TechniqueVariant,
}

impl Technique {
    /// Create a usable technique of the given kind.
    #[must_use]
    pub fn new(kind: TechniqueKind) -> Self {
        let variant = match kind {
            TechniqueKind::Limitless => TechniqueVariant::Limitless,
            TechniqueKind::Shrine => TechniqueVariant::Shrine {
                world_cutting_slash_allowed: false,
            },
        };
        Self {
            status: TechniqueStatus::Usable,
            base_output: kind.base_output(),
            variant,
        }
    }

    /// Get the kind this technique was built from.
    #[must_use]
    pub fn kind(&self) -> TechniqueKind {
        match self.variant {
            TechniqueVariant::Limitless => TechniqueKind::Limitless,
            TechniqueVariant::Shrine { .. } => TechniqueKind::Shrine,
        }
    }

    /// Get the variant data.
    #[must_use]
    pub fn variant(&self) -> &TechniqueVariant {
        &self.variant
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> TechniqueStatus {
        self.status
    }

    /// Get the output before status is applied.
    #[must_use]
    pub fn base_output(&self) -> f64 {
        self.base_output
    }

    /// Move to any status. Never touches the finishing-move gate.
    pub fn set_status(&mut self, status: TechniqueStatus) {
        if self.status != status {
            debug!(technique = self.kind().name(), from = ?self.status, to = ?status, "technique status changed");
        }
        self.status = status;
    }

    /// Enter `DomainBoost`.
    pub fn boost(&mut self) {
        self.set_status(TechniqueStatus::DomainBoost);
    }

    /// Enter `BurntOut`.
    pub fn burn_out(&mut self) {
        self.set_status(TechniqueStatus::BurntOut);
    }

    /// Return to `Usable`.
    pub fn restore(&mut self) {
        self.set_status(TechniqueStatus::Usable);
    }

    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.status == TechniqueStatus::Usable
    }

    #[must_use]
    pub fn is_boosted(&self) -> bool {
        self.status == TechniqueStatus::DomainBoost
    }

    #[must_use]
    pub fn is_burnt_out(&self) -> bool {
        self.status == TechniqueStatus::BurntOut
    }

    /// Output after applying the current status.
    ///
    /// Boosted techniques hit harder, burnt-out ones produce nothing.
    #[must_use]
    pub fn effective_output(&self) -> f64 {
        match self.status {
            TechniqueStatus::Usable => self.base_output,
            TechniqueStatus::DomainBoost => self.base_output * DOMAIN_BOOST_MULTIPLIER,
            TechniqueStatus::BurntOut => 0.0,
        }
    }

    /// Does this technique carry a finishing-move gate at all?
    #[must_use]
    pub fn has_unlock_gate(&self) -> bool {
        matches!(self.variant, TechniqueVariant::Shrine { .. })
    }

    /// Is World Cutting Slash available? Always false for non-Shrine techniques.
    #[must_use]
    pub fn world_cutting_slash_allowed(&self) -> bool {
        matches!(
            self.variant,
            TechniqueVariant::Shrine {
                world_cutting_slash_allowed: true
            }
        )
    }

    /// Open the finishing-move gate.
    ///
    /// Returns `true` only when the gate was closed and is now open.
    pub(crate) fn allow_world_cutting_slash(&mut self) -> bool {
        match &mut self.variant {
            TechniqueVariant::Shrine {
                world_cutting_slash_allowed,
            } if !*world_cutting_slash_allowed => {
                *world_cutting_slash_allowed = true;
                true
            }
            _ => false,
        }
    }
}
