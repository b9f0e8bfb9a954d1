//! Sorcerer state: resources, domain lifecycle, RCT, and roster.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{Combatant, CombatantId, CombatResult, Entity, RctConfig};
use crate::domains::Domain;
use crate::shikigami::Shikigami;
use crate::techniques::{Technique, TechniqueStatus};

/// Inline capacity of a shikigami roster before it spills to the heap.
pub const ROSTER_INLINE: usize = 2;

/// Ordered shikigami roster, inline for the common one or two summons.
pub type ShikigamiRoster = SmallVec<[Shikigami; ROSTER_INLINE]>;

/// Reverse cursed technique level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RctLevel {
    #[default]
    Disabled,
    Active,
    Overdrive,
}

/// How much of the opponent's toolkit a sorcerer has worked out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Understanding {
    #[default]
    None,
    DomainAmplification,
    DomainAmpAndMahoraga,
}

/// Result of advancing the domain by one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainTick {
    /// No domain was up.
    Inactive,
    /// Domain is still up with this many turns left.
    Continuing { remaining: u32 },
    /// Domain ran out of turns and was deactivated.
    Expired,
}

/// A combatant owning one domain, an optional technique, and a roster of
/// shikigami.
///
/// Build one with `SorcererBuilder`. The domain and technique are fixed at
/// construction and only change through the commands below, so neither can
/// be swapped out from outside the crate:
///
/// ```compile_fail
/// use sorcerer_showdown::core::CombatantId;
/// use sorcerer_showdown::domains::{Domain, DomainKind};
/// use sorcerer_showdown::sorcerer::Sorcerer;
///
/// let mut sukuna = Sorcerer::sukuna(CombatantId(1));
/// *sukuna.domain_mut() = Domain::new(DomainKind::InfiniteVoid);
/// ```
///
/// ```compile_fail
/// use sorcerer_showdown::core::CombatantId;
/// use sorcerer_showdown::sorcerer::Sorcerer;
///
/// let mut sukuna = Sorcerer::sukuna(CombatantId(1));
/// sukuna.technique_mut();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sorcerer {
    pub(crate) id: CombatantId,
    pub(crate) name: String,
    pub(crate) entity: Entity,
    pub(crate) domain: Domain,
    pub(crate) technique: Option<Technique>,
    pub(crate) shikigami: ShikigamiRoster,
    pub(crate) domain_active: bool,
    pub(crate) domain_limit: u32,
    pub(crate) domain_turns_remaining: u32,
    pub(crate) rct: RctLevel,
    pub(crate) rct_config: RctConfig,
    pub(crate) domain_amplification_active: bool,
    pub(crate) understanding: Understanding,
}

impl Sorcerer {
    /// Get the combatant id.
    #[must_use]
    pub fn id(&self) -> CombatantId {
        self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Resources ===

    /// Get the resource holder.
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Get the resource holder mutably.
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> f64 {
        self.entity.health()
    }

    /// Current cursed energy.
    #[must_use]
    pub fn cursed_energy(&self) -> f64 {
        self.entity.cursed_energy()
    }

    /// Is the sorcerer stunned?
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.entity.is_stunned()
    }

    /// Has health dropped to zero or below?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.entity.is_defeated()
    }

    /// Subtract health, see `Entity::damage`.
    pub fn damage(&mut self, amount: f64) {
        self.entity.damage(amount);
    }

    /// Add health, see `Entity::heal`.
    pub fn heal(&mut self, amount: f64) {
        self.entity.heal(amount);
    }

    /// Unchecked debit, see `Entity::spend_energy`.
    pub fn spend_energy(&mut self, amount: f64) {
        self.entity.spend_energy(amount);
    }

    /// Checked debit, see `Entity::try_spend_energy`.
    pub fn try_spend_energy(&mut self, amount: f64) -> CombatResult<()> {
        self.entity.try_spend_energy(amount)
    }

    /// Add cursed energy.
    pub fn restore_energy(&mut self, amount: f64) {
        self.entity.restore_energy(amount);
    }

    /// Set or clear the stun flag.
    pub fn set_stunned(&mut self, stunned: bool) {
        self.entity.set_stunned(stunned);
    }

    // === Domain ===

    /// Get the owned domain.
    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub(crate) fn domain_mut(&mut self) -> &mut Domain {
        &mut self.domain
    }

    /// Shrink or widen the domain's reach.
    ///
    /// # Errors
    ///
    /// `InvalidRange` unless `range` is positive and finite; the range is unchanged.
    pub fn set_domain_range(&mut self, range: f64) -> CombatResult<()> {
        self.domain_mut().set_current_range(range)
    }

    /// Return the domain to its base range.
    pub fn reset_domain_range(&mut self) {
        self.domain_mut().reset_range();
    }

    /// Is the domain currently expanded?
    #[must_use]
    pub fn is_domain_active(&self) -> bool {
        self.domain_active
    }

    /// Turns a freshly expanded domain stays up.
    #[must_use]
    pub fn domain_limit(&self) -> u32 {
        self.domain_limit
    }

    /// Turns left before the domain collapses (0 while inactive).
    #[must_use]
    pub fn domain_turns_remaining(&self) -> u32 {
        self.domain_turns_remaining
    }

    /// Expand the domain. Refreshes the turn budget if already up.
    pub fn activate_domain(&mut self) {
        self.domain_active = true;
        self.domain_turns_remaining = self.domain_limit;
        debug!(sorcerer = %self.name, domain = %self.domain.kind(), turns = self.domain_limit, "domain activated");
    }

    /// Collapse the domain.
    ///
    /// Clears this sorcerer's clash flag and burns out the technique, if any.
    /// The opponent's clash flag is left alone, so its sure-hits stay
    /// suppressed until the turn loop calls
    /// `CombatResolver::judge_domain_clash` again.
    pub fn deactivate_domain(&mut self) {
        self.domain_active = false;
        self.domain_turns_remaining = 0;
        self.domain.set_clash_state(false);
        if let Some(technique) = self.technique.as_mut() {
            technique.burn_out();
        }
        debug!(sorcerer = %self.name, domain = %self.domain.kind(), "domain deactivated");
    }

    /// Set this domain's clash flag directly.
    ///
    /// `CombatResolver::judge_domain_clash` keeps both sides in step.
    pub fn set_clash_state(&mut self, clashing: bool) {
        self.domain.set_clash_state(clashing);
    }

    /// Spend one turn of the domain's budget.
    ///
    /// The domain collapses when the budget hits zero.
    pub fn advance_domain_turn(&mut self) -> DomainTick {
        if !self.domain_active {
            return DomainTick::Inactive;
        }

        self.domain_turns_remaining = self.domain_turns_remaining.saturating_sub(1);
        if self.domain_turns_remaining == 0 {
            self.deactivate_domain();
            info!(sorcerer = %self.name, domain = %self.domain.kind(), "domain expired");
            DomainTick::Expired
        } else {
            DomainTick::Continuing {
                remaining: self.domain_turns_remaining,
            }
        }
    }

    /// Is domain amplification switched on?
    #[must_use]
    pub fn is_domain_amplification_active(&self) -> bool {
        self.domain_amplification_active
    }

    /// Toggle domain amplification.
    ///
    /// Using it at least once teaches the sorcerer how it works.
    pub fn set_domain_amplification(&mut self, active: bool) {
        self.domain_amplification_active = active;
        if active {
            self.raise_understanding(Understanding::DomainAmplification);
        }
    }

    /// How far the sorcerer has read the opponent. Only ever rises.
    #[must_use]
    pub fn understanding(&self) -> Understanding {
        self.understanding
    }

    /// Understanding never drops.
    pub(crate) fn raise_understanding(&mut self, level: Understanding) {
        if level > self.understanding {
            debug!(sorcerer = %self.name, from = ?self.understanding, to = ?level, "understanding raised");
            self.understanding = level;
        }
    }

    // === Technique ===

    /// Get the owned technique, if any.
    #[must_use]
    pub fn technique(&self) -> Option<&Technique> {
        self.technique.as_ref()
    }

    pub(crate) fn technique_mut(&mut self) -> Option<&mut Technique> {
        self.technique.as_mut()
    }

    /// Move the technique to `status`. Returns `false` if there is no technique.
    ///
    /// Status commands never open the finishing-move gate; only
    /// `CombatResolver::check_world_cutting_slash_unlock` does.
    pub fn set_technique_status(&mut self, status: TechniqueStatus) -> bool {
        match self.technique_mut() {
            Some(technique) => {
                technique.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Boost the technique for the duration of a domain.
    pub fn boost_technique(&mut self) -> bool {
        self.set_technique_status(TechniqueStatus::DomainBoost)
    }

    /// Burn out the technique.
    pub fn burn_out_technique(&mut self) -> bool {
        self.set_technique_status(TechniqueStatus::BurntOut)
    }

    /// Bring a burnt-out technique back to `Usable`.
    pub fn restore_technique(&mut self) -> bool {
        self.set_technique_status(TechniqueStatus::Usable)
    }

    /// Does the sorcerer own a technique?
    #[must_use]
    pub fn has_technique(&self) -> bool {
        self.technique.is_some()
    }

    /// Does the owned technique carry a finishing-move gate?
    #[must_use]
    pub fn holds_unlock_gated_technique(&self) -> bool {
        self.technique.as_ref().is_some_and(Technique::has_unlock_gate)
    }

    // === Reverse cursed technique ===

    /// Current reverse cursed technique level.
    #[must_use]
    pub fn rct_level(&self) -> RctLevel {
        self.rct
    }

    /// Heal and energy cost per RCT level.
    #[must_use]
    pub fn rct_config(&self) -> &RctConfig {
        &self.rct_config
    }

    /// Switch RCT to any level.
    pub fn set_rct_level(&mut self, level: RctLevel) {
        if self.rct != level {
            debug!(sorcerer = %self.name, from = ?self.rct, to = ?level, "rct level changed");
        }
        self.rct = level;
    }

    /// Switch RCT off.
    pub fn disable_rct(&mut self) {
        self.set_rct_level(RctLevel::Disabled);
    }

    /// Switch RCT to `Active`.
    pub fn enable_rct(&mut self) {
        self.set_rct_level(RctLevel::Active);
    }

    /// Switch RCT to `Overdrive`.
    pub fn boost_rct(&mut self) {
        self.set_rct_level(RctLevel::Overdrive);
    }

    /// Heal once at the current RCT level, paying its energy cost.
    ///
    /// Returns the health restored (0 while disabled).
    ///
    /// # Errors
    ///
    /// `InsufficientEnergy` if the pool cannot pay; nothing is healed.
    pub fn apply_reverse_cursed_technique(&mut self) -> CombatResult<f64> {
        let Some(cost) = self.rct_config.cost(self.rct) else {
            return Ok(0.0);
        };

        self.entity.try_spend_energy(cost.energy)?;
        self.entity.heal(cost.heal);
        debug!(sorcerer = %self.name, level = ?self.rct, heal = cost.heal, energy = cost.energy, "reverse cursed technique applied");
        Ok(cost.heal)
    }

    // === Shikigami ===

    /// Get the roster in summoning order.
    #[must_use]
    pub fn shikigami(&self) -> &[Shikigami] {
        &self.shikigami
    }

    /// Get the roster mutably. The roster's length is fixed through this view.
    pub fn shikigami_mut(&mut self) -> &mut [Shikigami] {
        &mut self.shikigami
    }

    /// Find a roster member by id.
    #[must_use]
    pub fn shikigami_by_id(&self, id: CombatantId) -> Option<&Shikigami> {
        self.shikigami.iter().find(|s| s.id() == id)
    }

    /// Find a roster member by id, mutably.
    pub fn shikigami_by_id_mut(&mut self, id: CombatantId) -> Option<&mut Shikigami> {
        self.shikigami.iter_mut().find(|s| s.id() == id)
    }

    /// Add a shikigami to the end of the roster.
    pub fn add_shikigami(&mut self, shikigami: Shikigami) {
        debug!(sorcerer = %self.name, shikigami = shikigami.name(), id = %shikigami.id(), "shikigami added to roster");
        self.shikigami.push(shikigami);
    }

    /// Count a turn of active time for every active shikigami and
    /// recompute adaptation.
    ///
    /// Call at most once per combat turn.
    pub fn advance_shikigami_turn(&mut self) {
        for shikigami in self.shikigami.iter_mut() {
            shikigami.increment_active_time();
            shikigami.adapt();
        }
    }

    /// First roster member that has fully adapted, if any.
    #[must_use]
    pub fn fully_adapted_shikigami(&self) -> Option<&Shikigami> {
        self.shikigami.iter().find(|s| s.fully_adapted_to_infinity())
    }

    /// Has any roster member fully adapted?
    #[must_use]
    pub fn has_fully_adapted_shikigami(&self) -> bool {
        self.fully_adapted_shikigami().is_some()
    }
}

impl Combatant for Sorcerer {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombatError, SorcererConfig};
    use crate::domains::DomainKind;
    use crate::sorcerer::SorcererBuilder;
    use crate::techniques::TechniqueKind;

    fn sukuna() -> Sorcerer {
        SorcererBuilder::from_config(CombatantId(1), SorcererConfig::sukuna()).build()
    }

    #[test]
    fn test_initial_state() {
        let sorcerer = sukuna();
        assert_eq!(sorcerer.name(), "Sukuna");
        assert_eq!(sorcerer.health(), 500.0);
        assert_eq!(sorcerer.cursed_energy(), 12000.0);
        assert!(!sorcerer.is_domain_active());
        assert_eq!(sorcerer.domain_limit(), 5);
        assert_eq!(sorcerer.rct_level(), RctLevel::Disabled);
        assert!(!sorcerer.is_domain_amplification_active());
        assert_eq!(sorcerer.understanding(), Understanding::None);
        assert_eq!(sorcerer.domain().kind(), DomainKind::MalevolentShrine);
        assert!(sorcerer.shikigami().is_empty());
    }

    #[test]
    fn test_domain_activation_cycle() {
        let mut sorcerer = sukuna();

        sorcerer.activate_domain();
        assert!(sorcerer.is_domain_active());
        assert_eq!(sorcerer.domain_turns_remaining(), 5);

        sorcerer.set_clash_state(true);
        sorcerer.deactivate_domain();

        assert!(!sorcerer.is_domain_active());
        assert!(!sorcerer.domain().is_clashing());
        assert!(sorcerer.technique().unwrap().is_burnt_out());
    }

    #[test]
    fn test_domain_expires_after_limit() {
        let mut sorcerer = sukuna();
        assert_eq!(sorcerer.advance_domain_turn(), DomainTick::Inactive);

        sorcerer.activate_domain();
        for remaining in (1..5).rev() {
            assert_eq!(sorcerer.advance_domain_turn(), DomainTick::Continuing { remaining });
        }
        assert_eq!(sorcerer.advance_domain_turn(), DomainTick::Expired);
        assert!(!sorcerer.is_domain_active());
        assert!(sorcerer.technique().unwrap().is_burnt_out());
    }

    #[test]
    fn test_deactivate_without_technique() {
        let config = SorcererConfig::new("Plain", 100.0, 100.0, DomainKind::InfiniteVoid);
        let mut sorcerer = SorcererBuilder::from_config(CombatantId(2), config).build();

        sorcerer.activate_domain();
        sorcerer.deactivate_domain();

        assert!(!sorcerer.is_domain_active());
        assert!(!sorcerer.has_technique());
    }

    #[test]
    fn test_domain_amplification_raises_understanding() {
        let mut sorcerer = sukuna();

        sorcerer.set_domain_amplification(true);
        assert!(sorcerer.is_domain_amplification_active());
        assert_eq!(sorcerer.understanding(), Understanding::DomainAmplification);

        sorcerer.set_domain_amplification(false);
        assert_eq!(sorcerer.understanding(), Understanding::DomainAmplification);

        sorcerer.raise_understanding(Understanding::DomainAmpAndMahoraga);
        sorcerer.raise_understanding(Understanding::None);
        assert_eq!(sorcerer.understanding(), Understanding::DomainAmpAndMahoraga);
    }

    #[test]
    fn test_rct_levels() {
        let mut sorcerer = sukuna();
        sorcerer.enable_rct();
        assert_eq!(sorcerer.rct_level(), RctLevel::Active);
        sorcerer.boost_rct();
        assert_eq!(sorcerer.rct_level(), RctLevel::Overdrive);
        sorcerer.disable_rct();
        assert_eq!(sorcerer.rct_level(), RctLevel::Disabled);
    }

    #[test]
    fn test_apply_rct() {
        let mut sorcerer = sukuna();
        sorcerer.damage(100.0);

        assert_eq!(sorcerer.apply_reverse_cursed_technique().unwrap(), 0.0);
        assert_eq!(sorcerer.health(), 400.0);

        sorcerer.enable_rct();
        assert_eq!(sorcerer.apply_reverse_cursed_technique().unwrap(), 25.0);
        assert_eq!(sorcerer.health(), 425.0);
        assert_eq!(sorcerer.cursed_energy(), 11950.0);

        sorcerer.boost_rct();
        assert_eq!(sorcerer.apply_reverse_cursed_technique().unwrap(), 60.0);
        assert_eq!(sorcerer.health(), 485.0);
        assert_eq!(sorcerer.cursed_energy(), 11800.0);
    }

    #[test]
    fn test_apply_rct_without_energy() {
        let config = SorcererConfig::new("Drained", 100.0, 10.0, DomainKind::InfiniteVoid);
        let mut sorcerer = SorcererBuilder::from_config(CombatantId(3), config).build();
        sorcerer.enable_rct();

        let err = sorcerer.apply_reverse_cursed_technique().unwrap_err();

        assert!(matches!(err, CombatError::InsufficientEnergy { .. }));
        assert_eq!(sorcerer.health(), 100.0);
        assert_eq!(sorcerer.cursed_energy(), 10.0);
    }

    #[test]
    fn test_roster_lookup_and_turns() {
        let mut sorcerer = SorcererBuilder::from_config(CombatantId(1), SorcererConfig::sukuna())
            .with_shikigami(Shikigami::mahoraga(CombatantId(10)))
            .with_shikigami(Shikigami::agito(CombatantId(11)))
            .build();

        sorcerer.shikigami_by_id_mut(CombatantId(10)).unwrap().manifest();
        for _ in 0..50 {
            sorcerer.advance_shikigami_turn();
        }

        assert_eq!(sorcerer.shikigami_by_id(CombatantId(10)).unwrap().active_turns(), 50);
        assert_eq!(sorcerer.shikigami_by_id(CombatantId(11)).unwrap().active_turns(), 0);
        assert!(sorcerer.has_fully_adapted_shikigami());
        assert_eq!(sorcerer.fully_adapted_shikigami().unwrap().id(), CombatantId(10));
        assert!(sorcerer.shikigami_by_id(CombatantId(99)).is_none());
    }

    #[test]
    fn test_domain_range_commands() {
        let mut sorcerer = sukuna();

        sorcerer.set_domain_range(30.0).unwrap();
        assert_eq!(sorcerer.domain().current_range(), 30.0);
        assert_eq!(sorcerer.domain().kind(), DomainKind::MalevolentShrine);

        let err = sorcerer.set_domain_range(-1.0).unwrap_err();
        assert!(matches!(err, CombatError::InvalidRange(_)));
        assert_eq!(sorcerer.domain().current_range(), 30.0);

        sorcerer.reset_domain_range();
        assert_eq!(sorcerer.domain().current_range(), sorcerer.domain().base_range());
    }

    #[test]
    fn test_technique_status_commands_keep_gate_closed() {
        let mut sorcerer = sukuna();

        assert!(sorcerer.boost_technique());
        assert!(sorcerer.technique().unwrap().is_boosted());
        assert!(sorcerer.burn_out_technique());
        assert!(sorcerer.technique().unwrap().is_burnt_out());
        assert!(sorcerer.restore_technique());
        assert!(sorcerer.technique().unwrap().is_usable());
        assert!(sorcerer.set_technique_status(TechniqueStatus::DomainBoost));

        assert!(!sorcerer.technique().unwrap().world_cutting_slash_allowed());
    }

    #[test]
    fn test_technique_commands_without_technique() {
        let config = SorcererConfig::new("Plain", 100.0, 100.0, DomainKind::InfiniteVoid);
        let mut sorcerer = SorcererBuilder::from_config(CombatantId(4), config).build();

        assert!(!sorcerer.boost_technique());
        assert!(!sorcerer.restore_technique());
        assert!(!sorcerer.has_technique());
    }

    #[test]
    fn test_deactivate_leaves_opponent_clashing() {
        let mut sukuna = sukuna();
        let mut gojo = SorcererBuilder::from_config(CombatantId(2), SorcererConfig::gojo()).build();
        sukuna.activate_domain();
        gojo.activate_domain();
        sukuna.set_clash_state(true);
        gojo.set_clash_state(true);

        gojo.deactivate_domain();

        assert!(!gojo.domain().is_clashing());
        assert!(sukuna.domain().is_clashing());
    }

    #[test]
    fn test_unlock_gated_technique_query() {
        assert!(sukuna().holds_unlock_gated_technique());

        let gojo = SorcererBuilder::from_config(CombatantId(2), SorcererConfig::gojo()).build();
        assert!(!gojo.holds_unlock_gated_technique());
        assert_eq!(gojo.technique().unwrap().kind(), TechniqueKind::Limitless);
    }
}
