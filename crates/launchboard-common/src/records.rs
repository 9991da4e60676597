//! Core launch-record types shared between the data and web crates.

use serde::{Deserialize, Serialize};

/// Binary result of a launch attempt.
///
/// The source data encodes this in the `class` column as `0` (failure)
/// or `1` (success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the `class` column value. Anything other than 0 or 1 is
    /// malformed data.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The `class` encoding, used as the scatter chart's y value.
    pub fn as_class(&self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the launch-records table.
///
/// Each record belongs to exactly one site and carries exactly one outcome.
/// The table is loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_version: String,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_class_round_trip() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.as_class(), 1);
        assert_eq!(Outcome::Failure.as_class(), 0);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }

    #[test]
    fn test_failure_sorts_before_success() {
        // BTreeMap keys rely on this for deterministic pie slice order
        assert!(Outcome::Failure < Outcome::Success);
    }
}
