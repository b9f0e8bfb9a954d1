//! Combat resolution across sorcerers and their companions.
//!
//! - `CombatResolver`: stateless rules that read one or two sorcerers and
//!   apply cross-entity effects (domain clashes, sure-hits, companion
//!   support, finishing-move unlocks)
//! - `CombatEvent`: what the resolver reports back to the turn loop
//!
//! ## Example
//!
//! ```
//! use sorcerer_showdown::combat::{CombatEvent, CombatResolver};
//! use sorcerer_showdown::core::CombatantId;
//! use sorcerer_showdown::sorcerer::Sorcerer;
//!
//! let mut gojo = Sorcerer::gojo(CombatantId(1));
//! let mut sukuna = Sorcerer::sukuna(CombatantId(2));
//!
//! gojo.activate_domain();
//! let event = CombatResolver::resolve_sure_hit(&gojo, &mut sukuna);
//! assert!(matches!(event, Some(CombatEvent::SureHit { .. })));
//! assert!(sukuna.is_stunned());
//!
//! // A clash cancels both sure-hits
//! sukuna.activate_domain();
//! CombatResolver::judge_domain_clash(&mut gojo, &mut sukuna);
//! let health = sukuna.health();
//! CombatResolver::resolve_sure_hit(&gojo, &mut sukuna);
//! assert_eq!(sukuna.health(), health);
//! ```

mod event;
mod resolver;

pub use event::CombatEvent;
pub use resolver::CombatResolver;
