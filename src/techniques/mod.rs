//! Techniques: named abilities with a usability state machine.
//!
//! A technique is a pure state holder. Its status changes only through
//! explicit commands (`boost`, `burn_out`, `restore`, `set_status`).
//!
//! The Shrine variant carries a finishing-move gate. The gate is opened
//! by `CombatResolver::check_world_cutting_slash_unlock`, never by the
//! technique or its owner.

mod technique;

pub use technique::{
    Technique, TechniqueKind, TechniqueStatus, TechniqueVariant, DOMAIN_BOOST_MULTIPLIER,
    LIMITLESS_BASE_OUTPUT, SHRINE_BASE_OUTPUT,
};
