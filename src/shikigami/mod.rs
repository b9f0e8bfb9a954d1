//! Shikigami: summonable companions.
//!
//! - `Shikigami`: entity, manifestation level, and active-turn counter
//! - `Manifestation`: Shadow, partial, or full summon
//! - `AdaptationStage`: spins an adaptive shikigami has completed
//!
//! Active time only accumulates while a shikigami is manifested (partially
//! or fully). Adaptation is recomputed from active time on `adapt()`.

mod adaptation;
mod companion;

pub use adaptation::{
    AdaptationStage, FIRST_SPIN_TURNS, FOURTH_SPIN_TURNS, SECOND_SPIN_TURNS, THIRD_SPIN_TURNS,
};
pub use companion::{
    Manifestation, Shikigami, ShikigamiKind, ShikigamiVariant, SupportAmounts, AGITO_HEALTH,
    AGITO_SUPPORT_HEAL, AGITO_SUPPORT_REGEN, MAHORAGA_HEALTH,
};
