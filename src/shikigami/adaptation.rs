//! Adaptation stages derived from active time.
//!
//! The stage is a pure function of the current active-turn count. It is
//! not a ratchet: resetting the count and adapting again lowers it.

use serde::{Deserialize, Serialize};

/// Active turns needed for each spin, checked highest first.
pub const FIRST_SPIN_TURNS: u32 = 10;
pub const SECOND_SPIN_TURNS: u32 = 25;
pub const THIRD_SPIN_TURNS: u32 = 40;
pub const FOURTH_SPIN_TURNS: u32 = 50;

/// How far an adaptive shikigami has adapted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdaptationStage {
    #[default]
    None,
    FirstSpin,
    SecondSpin,
    ThirdSpin,
    /// Full adaptation.
    FourthSpin,
}

impl AdaptationStage {
    /// Stage reached after `active_turns` active turns.
    ///
    /// ```
    /// use sorcerer_showdown::shikigami::AdaptationStage;
    ///
    /// assert_eq!(AdaptationStage::from_active_turns(9), AdaptationStage::None);
    /// assert_eq!(AdaptationStage::from_active_turns(25), AdaptationStage::SecondSpin);
    /// assert_eq!(AdaptationStage::from_active_turns(51), AdaptationStage::FourthSpin);
    /// ```
    #[must_use]
    pub const fn from_active_turns(active_turns: u32) -> Self {
        if active_turns >= FOURTH_SPIN_TURNS {
            AdaptationStage::FourthSpin
        } else if active_turns >= THIRD_SPIN_TURNS {
            AdaptationStage::ThirdSpin
        } else if active_turns >= SECOND_SPIN_TURNS {
            AdaptationStage::SecondSpin
        } else if active_turns >= FIRST_SPIN_TURNS {
            AdaptationStage::FirstSpin
        } else {
            AdaptationStage::None
        }
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, AdaptationStage::FourthSpin)
    }
}
