use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PoseError;

/// Lower bound of the angle domain, in degrees
pub const MIN_ANGLE: f32 = 0.0;
/// Upper bound of the angle domain, in degrees
pub const MAX_ANGLE: f32 = 180.0;

/// Grouping used to decide when a repetition completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateCategory {
    Rest,
    Active,
}

/// A semantic exercise state such as "standing" or "deep_squat"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseState {
    pub label: String,
    pub category: StateCategory,
}

impl ExerciseState {
    pub fn new(label: impl Into<String>, category: StateCategory) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }

    pub fn is_active(&self) -> bool {
        self.category == StateCategory::Active
    }
}

impl fmt::Display for ExerciseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Angle interval `(lower, upper]` bound to a state.
///
/// The interval starting at 0 also contains 0 itself, so `[0, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRange {
    pub label: String,
    pub category: StateCategory,
    pub lower: f32,
    pub upper: f32,
}

impl StateRange {
    pub fn new(label: impl Into<String>, category: StateCategory, lower: f32, upper: f32) -> Self {
        Self {
            label: label.into(),
            category,
            lower,
            upper,
        }
    }

    pub fn contains(&self, angle: f32) -> bool {
        let above_lower = if self.lower == MIN_ANGLE {
            angle >= self.lower
        } else {
            angle > self.lower
        };
        above_lower && angle <= self.upper
    }

    pub fn state(&self) -> ExerciseState {
        ExerciseState::new(self.label.clone(), self.category)
    }
}

/// Validated partition of [0, 180] into exercise states
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable {
    // sorted by lower bound
    ranges: Vec<StateRange>,
    states: Vec<ExerciseState>,
}

impl StateTable {
    /// Validate `ranges` and build the lookup table.
    ///
    /// The ranges must be non-empty, have finite bounds with `lower < upper`, use unique
    /// labels, and tile [0, 180] exactly: the first starts at 0, each next one starts where
    /// the previous ends, the last ends at 180. Input order does not matter.
    pub fn new(ranges: &[StateRange]) -> Result<Self, PoseError> {
        if ranges.is_empty() {
            return Err(invalid("no state ranges configured".to_string()));
        }

        for range in ranges {
            if !range.lower.is_finite() || !range.upper.is_finite() {
                return Err(invalid(format!("'{}' has a non-finite bound", range.label)));
            }
            if range.lower >= range.upper {
                return Err(invalid(format!(
                    "'{}' has lower bound {} not below upper bound {}",
                    range.label, range.lower, range.upper
                )));
            }
            if ranges.iter().filter(|other| other.label == range.label).count() > 1 {
                return Err(invalid(format!("duplicate state label '{}'", range.label)));
            }
        }

        let mut sorted = ranges.to_vec();
        sorted.sort_by(|a, b| a.lower.total_cmp(&b.lower));

        let first = &sorted[0];
        if first.lower != MIN_ANGLE {
            return Err(invalid(format!(
                "ranges start at {} ('{}'), must start at {MIN_ANGLE}",
                first.lower, first.label
            )));
        }

        for pair in sorted.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.lower > prev.upper {
                return Err(invalid(format!(
                    "gap between '{}' and '{}': ({}, {}] maps to no state",
                    prev.label, next.label, prev.upper, next.lower
                )));
            }
            if next.lower < prev.upper {
                return Err(invalid(format!(
                    "'{}' and '{}' overlap on ({}, {}]",
                    prev.label, next.label, next.lower, prev.upper
                )));
            }
        }

        let last = &sorted[sorted.len() - 1];
        if last.upper != MAX_ANGLE {
            return Err(invalid(format!(
                "ranges end at {} ('{}'), must end at {MAX_ANGLE}",
                last.upper, last.label
            )));
        }

        let states = sorted.iter().map(StateRange::state).collect();
        Ok(Self {
            ranges: sorted,
            states,
        })
    }

    /// State for an angle in [0, 180]; `None` outside the domain or for NaN.
    pub fn state_for(&self, angle: f32) -> Option<&ExerciseState> {
        self.ranges
            .iter()
            .position(|range| range.contains(angle))
            .map(|index| &self.states[index])
    }

    /// Ranges ordered from the smallest angle up
    pub fn ranges(&self) -> &[StateRange] {
        &self.ranges
    }
}

fn invalid(msg: String) -> PoseError {
    PoseError::InvalidStateRangeConfig(msg)
}
