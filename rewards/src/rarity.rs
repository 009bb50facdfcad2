//! Rarity thresholds and roll-to-band resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the five reward rarity bands, ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Band {
    /// The registry slot this band maps to (0 = common … 4 = legendary).
    pub fn slot(&self) -> u16 {
        match self {
            Band::Common => 0,
            Band::Uncommon => 1,
            Band::Rare => 2,
            Band::Epic => 3,
            Band::Legendary => 4,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Common => write!(f, "common"),
            Band::Uncommon => write!(f, "uncommon"),
            Band::Rare => write!(f, "rare"),
            Band::Epic => write!(f, "epic"),
            Band::Legendary => write!(f, "legendary"),
        }
    }
}

/// Rarity configuration errors — one named variant per ordering violation,
/// so a misconfiguring caller can tell exactly which boundary was wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RarityError {
    #[error("common must be less rare than uncommon")]
    CommonNotBelowUncommon,

    #[error("uncommon must be less rare than rare")]
    UncommonNotBelowRare,

    #[error("rare must be less rare than epic")]
    RareNotBelowEpic,

    #[error("epic must be less rare than legendary")]
    EpicNotBelowLegendary,

    #[error("legendary rarity level must be less than or equal to the max rarity roll")]
    LegendaryAboveMaxRoll,

    #[error("roll {roll} is above the max rarity roll {max_roll}")]
    RollOutOfRange { roll: u16, max_roll: u16 },
}

/// The six rarity thresholds.
///
/// Invariant: `common < uncommon < rare < epic < legendary <= max_roll`.
/// The table starts zeroed (nothing resolvable above roll 0) and is only
/// ever replaced wholesale by [`RarityTable::set_rarity_rolls`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityTable {
    common: u16,
    uncommon: u16,
    rare: u16,
    epic: u16,
    legendary: u16,
    max_roll: u16,
}

impl RarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all six thresholds atomically.
    ///
    /// Each ordering violation fails with its own variant and leaves the
    /// stored thresholds untouched.
    pub fn set_rarity_rolls(
        &mut self,
        common: u16,
        uncommon: u16,
        rare: u16,
        epic: u16,
        legendary: u16,
        max_roll: u16,
    ) -> Result<(), RarityError> {
        if common >= uncommon {
            return Err(RarityError::CommonNotBelowUncommon);
        }
        if uncommon >= rare {
            return Err(RarityError::UncommonNotBelowRare);
        }
        if rare >= epic {
            return Err(RarityError::RareNotBelowEpic);
        }
        if epic >= legendary {
            return Err(RarityError::EpicNotBelowLegendary);
        }
        if legendary > max_roll {
            return Err(RarityError::LegendaryAboveMaxRoll);
        }
        self.common = common;
        self.uncommon = uncommon;
        self.rare = rare;
        self.epic = epic;
        self.legendary = legendary;
        self.max_roll = max_roll;
        Ok(())
    }

    /// The currently configured thresholds, in ascending order.
    pub fn thresholds(&self) -> (u16, u16, u16, u16, u16, u16) {
        (
            self.common,
            self.uncommon,
            self.rare,
            self.epic,
            self.legendary,
            self.max_roll,
        )
    }

    pub fn max_roll(&self) -> u16 {
        self.max_roll
    }

    /// Resolve a roll to its rarity band.
    ///
    /// Returns the smallest band whose upper bound is >= the roll; anything
    /// above the epic bound up to `max_roll` is legendary. Rolls above
    /// `max_roll` are out of the configured domain and rejected.
    pub fn band_of(&self, roll: u16) -> Result<Band, RarityError> {
        if roll > self.max_roll {
            return Err(RarityError::RollOutOfRange {
                roll,
                max_roll: self.max_roll,
            });
        }
        let band = if roll <= self.common {
            Band::Common
        } else if roll <= self.uncommon {
            Band::Uncommon
        } else if roll <= self.rare {
            Band::Rare
        } else if roll <= self.epic {
            Band::Epic
        } else {
            Band::Legendary
        };
        Ok(band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RarityTable {
        let mut table = RarityTable::new();
        table.set_rarity_rolls(10, 15, 18, 20, 90, 100).unwrap();
        table
    }

    #[test]
    fn rejects_common_not_below_uncommon() {
        let mut table = RarityTable::new();
        let err = table.set_rarity_rolls(10, 5, 15, 20, 100, 100).unwrap_err();
        assert_eq!(err, RarityError::CommonNotBelowUncommon);
        assert_eq!(table.thresholds(), (0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn rejects_uncommon_not_below_rare() {
        let mut table = RarityTable::new();
        let err = table.set_rarity_rolls(10, 15, 15, 20, 100, 100).unwrap_err();
        assert_eq!(err, RarityError::UncommonNotBelowRare);
        assert_eq!(table.thresholds(), (0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn rejects_rare_not_below_epic() {
        let mut table = RarityTable::new();
        let err = table.set_rarity_rolls(10, 15, 20, 20, 100, 100).unwrap_err();
        assert_eq!(err, RarityError::RareNotBelowEpic);
        assert_eq!(table.thresholds(), (0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn rejects_epic_not_below_legendary() {
        let mut table = RarityTable::new();
        let err = table
            .set_rarity_rolls(10, 15, 20, 105, 100, 100)
            .unwrap_err();
        assert_eq!(err, RarityError::EpicNotBelowLegendary);
        assert_eq!(table.thresholds(), (0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn rejects_legendary_above_max_roll() {
        let mut table = RarityTable::new();
        let err = table.set_rarity_rolls(10, 15, 18, 20, 100, 80).unwrap_err();
        assert_eq!(err, RarityError::LegendaryAboveMaxRoll);
        assert_eq!(table.thresholds(), (0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn valid_thresholds_replace_wholesale() {
        let mut table = configured();
        assert_eq!(table.thresholds(), (10, 15, 18, 20, 90, 100));

        table.set_rarity_rolls(20, 30, 40, 50, 60, 64).unwrap();
        assert_eq!(table.thresholds(), (20, 30, 40, 50, 60, 64));
    }

    #[test]
    fn failed_update_keeps_previous_thresholds() {
        let mut table = configured();
        assert!(table.set_rarity_rolls(9, 8, 18, 20, 90, 100).is_err());
        assert_eq!(table.thresholds(), (10, 15, 18, 20, 90, 100));
    }

    #[test]
    fn band_boundaries_are_inclusive_at_upper_bound() {
        let table = configured();
        assert_eq!(table.band_of(0).unwrap(), Band::Common);
        assert_eq!(table.band_of(10).unwrap(), Band::Common);
        assert_eq!(table.band_of(11).unwrap(), Band::Uncommon);
        assert_eq!(table.band_of(15).unwrap(), Band::Uncommon);
        assert_eq!(table.band_of(16).unwrap(), Band::Rare);
        assert_eq!(table.band_of(18).unwrap(), Band::Rare);
        assert_eq!(table.band_of(19).unwrap(), Band::Epic);
        assert_eq!(table.band_of(20).unwrap(), Band::Epic);
        assert_eq!(table.band_of(21).unwrap(), Band::Legendary);
        assert_eq!(table.band_of(90).unwrap(), Band::Legendary);
        assert_eq!(table.band_of(100).unwrap(), Band::Legendary);
    }

    #[test]
    fn roll_above_max_is_out_of_domain() {
        let table = configured();
        let err = table.band_of(101).unwrap_err();
        assert_eq!(
            err,
            RarityError::RollOutOfRange {
                roll: 101,
                max_roll: 100,
            }
        );
    }

    #[test]
    fn band_slots_cover_the_registry_keys() {
        assert_eq!(Band::Common.slot(), 0);
        assert_eq!(Band::Uncommon.slot(), 1);
        assert_eq!(Band::Rare.slot(), 2);
        assert_eq!(Band::Epic.slot(), 3);
        assert_eq!(Band::Legendary.slot(), 4);
    }
}
