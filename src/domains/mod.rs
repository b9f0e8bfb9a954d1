//! Domains: bounded-area abilities with guaranteed-hit effects.
//!
//! - `Domain`: range, durability, and clash state of one domain
//! - `DomainKind`: the closed set of variants and their constants
//! - `SureHit`: the capability of landing a guaranteed hit on a target
//!
//! ## Clash Rule
//!
//! While a domain is clashing, its sure-hit is a no-op. The clash flag is
//! only changed through `Domain::set_clash_state`, normally driven by
//! `CombatResolver::judge_domain_clash`.

mod domain;

pub use domain::{
    Domain, DomainKind, SureHit, SureHitOutcome, BASE_RANGE, DOMAIN_HEALTH,
    INFINITE_VOID_BRAIN_DAMAGE, MALEVOLENT_SHRINE_SLASH_DAMAGE,
};
