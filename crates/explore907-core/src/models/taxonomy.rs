// ABOUTME: Closed enumerations bounding each filterable facet of an activity
// ABOUTME: Provides exact-label serde, lenient parsing, and declaration-order listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Facet enumerations.
//!
//! Every enumeration serializes as its exact dataset label (`"Fairbanks-Denali"`,
//! `"Few Hours"`). Parsing trims and ignores ASCII case, so `" kenai "` resolves
//! to [`Area::Kenai`]; anything else is rejected rather than guessed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Exact dataset label
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Resolve a label, ignoring surrounding whitespace and ASCII case
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(wanted))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| {
                    let valid: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                    AppError::invalid_input(format!(
                        "Unknown {}: '{}'. Valid options: {}",
                        $what,
                        s,
                        valid.join(", ")
                    ))
                })
            }
        }
    };
}

label_enum! {
    /// Kind of outing an activity offers; a record carries one or more
    ActivityType, "activity type" {
        /// Road or trail cycling
        Bike => "Bike",
        /// Scenic drive
        Drive => "Drive",
        /// Fishing
        Fish => "Fish",
        /// Hiking
        Hike => "Hike",
        /// Kayak, canoe, or packraft
        Paddle => "Paddle",
        /// Downhill, nordic, or backcountry skiing
        Ski => "Ski",
        /// Guided or self-guided tour
        Tour => "Tour",
    }
}

label_enum! {
    /// Region of the state an activity belongs to
    Area, "area" {
        /// Anchorage and surroundings
        Anchorage => "Anchorage",
        /// Interior, from Fairbanks to Denali
        FairbanksDenali => "Fairbanks-Denali",
        /// Kenai Peninsula
        Kenai => "Kenai",
        /// Matanuska-Susitna valleys
        MatSu => "Mat-Su",
        /// Inside Passage and panhandle
        Southeast => "Southeast",
        /// Valdez and Prince William Sound
        Valdez => "Valdez",
    }
}

label_enum! {
    /// Physical difficulty of an activity
    Difficulty, "difficulty" {
        /// Suitable for most people
        Easy => "Easy",
        /// Requires moderate fitness
        Medium => "Medium",
        /// Strenuous
        Tough => "Tough",
    }
}

label_enum! {
    /// Season in which an activity is available; a record carries one or both
    Season, "season" {
        /// Summer season
        Summer => "Summer",
        /// Winter season
        Winter => "Winter",
    }
}

label_enum! {
    /// Time budget an activity needs
    TimeRequired, "time required" {
        /// A few hours
        FewHours => "Few Hours",
        /// A full day
        FullDay => "Full Day",
        /// Overnight or longer
        Weekend => "Weekend",
    }
}

impl Difficulty {
    /// Ordinal rank used for sorting (Easy=1, Medium=2, Tough=3)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Tough => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(Area::parse("  mat-su "), Some(Area::MatSu));
        assert_eq!(TimeRequired::parse("FULL DAY"), Some(TimeRequired::FullDay));
        assert_eq!(ActivityType::parse("hike"), Some(ActivityType::Hike));
        assert_eq!(Area::parse("Matsu"), None);
        assert_eq!(Season::parse(""), None);
    }

    #[test]
    fn test_from_str_lists_valid_options() {
        let error = "Spring".parse::<Season>().unwrap_err();
        assert!(error.message.contains("Unknown season: 'Spring'"));
        assert!(error.message.contains("Summer, Winter"));
    }

    #[test]
    fn test_serde_uses_exact_labels() {
        let json = serde_json::to_string(&Area::FairbanksDenali).unwrap();
        assert_eq!(json, "\"Fairbanks-Denali\"");
        let parsed: TimeRequired = serde_json::from_str("\"Few Hours\"").unwrap();
        assert_eq!(parsed, TimeRequired::FewHours);
        assert!(serde_json::from_str::<Difficulty>("\"easy\"").is_err());
    }

    #[test]
    fn test_all_lists_declaration_order() {
        assert_eq!(ActivityType::ALL.len(), 7);
        assert_eq!(Area::ALL.first(), Some(&Area::Anchorage));
        assert_eq!(
            Difficulty::ALL,
            &[Difficulty::Easy, Difficulty::Medium, Difficulty::Tough]
        );
    }

    #[test]
    fn test_difficulty_rank() {
        let ranks: Vec<u8> = Difficulty::ALL.iter().map(Difficulty::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
