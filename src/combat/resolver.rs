//! Cross-entity combat rules.
//!
//! `CombatResolver` holds no state. Each rule reads the sorcerers it is
//! given, mutates what they own, and reports what happened.

use tracing::{debug, info};

use super::CombatEvent;
use crate::core::Combatant;
use crate::domains::SureHit;
use crate::sorcerer::{Sorcerer, Understanding};

/// Stateless rule engine for effects that span more than one entity.
pub struct CombatResolver;

impl CombatResolver {
    /// Decide whether two sorcerers' domains clash.
    ///
    /// Both domains active puts both into the clash state, otherwise both
    /// clash flags are cleared. An event is reported only when a clash
    /// begins.
    pub fn judge_domain_clash(first: &mut Sorcerer, second: &mut Sorcerer) -> Option<CombatEvent> {
        let clashing = first.is_domain_active() && second.is_domain_active();
        let already_clashing = first.domain().is_clashing() && second.domain().is_clashing();

        first.set_clash_state(clashing);
        second.set_clash_state(clashing);

        if clashing && !already_clashing {
            info!(
                first = %first.name(),
                second = %second.name(),
                "domain clash"
            );
            Some(CombatEvent::DomainClash {
                first: first.id(),
                second: second.id(),
            })
        } else {
            None
        }
    }

    /// Land `user`'s sure-hit on `target`.
    ///
    /// Returns `None` if the user's domain is not active. A clashing
    /// domain leaves the target untouched and reports `SureHitSuppressed`.
    ///
    /// The clash flag is read as-is. After either side collapses its domain,
    /// call `judge_domain_clash` again before resolving, or the survivor stays
    /// suppressed.
    pub fn resolve_sure_hit<T: Combatant>(user: &Sorcerer, target: &mut T) -> Option<CombatEvent> {
        if !user.is_domain_active() {
            return None;
        }

        let domain = user.domain();
        let target_id = target.combatant_id();

        match domain.on_sure_hit(target.entity_mut()) {
            Some(outcome) => {
                debug!(
                    user = %user.name(),
                    target = %target_id,
                    domain = %domain.kind(),
                    damage = outcome.damage,
                    stunned = outcome.stunned,
                    "sure-hit landed"
                );
                Some(CombatEvent::SureHit {
                    user: user.id(),
                    target: target_id,
                    domain: domain.kind(),
                    damage: outcome.damage,
                    stunned: outcome.stunned,
                })
            }
            None => {
                debug!(user = %user.name(), target = %target_id, domain = %domain.kind(), "sure-hit suppressed by clash");
                Some(CombatEvent::SureHitSuppressed {
                    user: user.id(),
                    target: target_id,
                    domain: domain.kind(),
                })
            }
        }
    }

    /// Apply passive support from every active support shikigami.
    ///
    /// The summoner is healed by each supporter's heal amount and each
    /// supporter regenerates its own health.
    pub fn apply_companion_support(user: &mut Sorcerer) -> Vec<CombatEvent> {
        let user_id = user.id();
        let mut events = Vec::new();
        let mut total_heal = 0.0;

        for shikigami in user.shikigami_mut().iter_mut() {
            if !shikigami.is_active() {
                continue;
            }
            let Some(support) = shikigami.support() else {
                continue;
            };

            shikigami.entity_mut().heal(support.regen);
            total_heal += support.heal;
            events.push(CombatEvent::CompanionSupport {
                user: user_id,
                shikigami: shikigami.id(),
                heal: support.heal,
                regen: support.regen,
            });
        }

        if !events.is_empty() {
            user.heal(total_heal);
            debug!(user = %user.name(), heal = total_heal, supporters = events.len(), "companion support applied");
        }

        events
    }

    /// Open the World Cutting Slash gate once a companion has fully adapted.
    ///
    /// Requires a fully adapted shikigami in the roster and an unlock-gated
    /// technique. Returns the event only on the call that opens the gate;
    /// later calls change nothing and return `None`.
    ///
    /// This is the only way to open the gate. Technique status commands on
    /// the sorcerer leave it closed.
    pub fn check_world_cutting_slash_unlock(user: &mut Sorcerer) -> Option<CombatEvent> {
        let shikigami = user.fully_adapted_shikigami()?.id();
        let technique = user.technique_mut()?;

        if !technique.allow_world_cutting_slash() {
            return None;
        }

        user.raise_understanding(Understanding::DomainAmpAndMahoraga);
        info!(user = %user.name(), shikigami = %shikigami, "world cutting slash unlocked");

        Some(CombatEvent::WorldCuttingSlashUnlocked {
            user: user.id(),
            shikigami,
        })
    }
}
