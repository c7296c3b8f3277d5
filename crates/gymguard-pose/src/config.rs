use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Joint, JointTriple, PoseError, StateCategory, StateRange};

/// Minimum landmark visibility accepted when a config does not set one
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

fn default_min_visibility() -> f32 {
    DEFAULT_MIN_VISIBILITY
}

/// How several measured angles combine into the one angle that selects the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleReduction {
    First,
    Min,
    Max,
    #[default]
    Mean,
}

impl AngleReduction {
    /// `None` for an empty slice
    pub fn reduce(self, angles: &[f32]) -> Option<f32> {
        let first = *angles.first()?;
        Some(match self {
            AngleReduction::First => first,
            AngleReduction::Min => angles.iter().copied().fold(first, f32::min),
            AngleReduction::Max => angles.iter().copied().fold(first, f32::max),
            AngleReduction::Mean => angles.iter().sum::<f32>() / angles.len() as f32,
        })
    }
}

/// Exercise definition: which angles to measure and how they map to states.
///
/// Stored as JSON so exercises can be added without recompiling:
///
/// ```json
/// {
///   "name": "squat_left",
///   "angles": [{ "proximal": "left_hip", "vertex": "left_knee", "distal": "left_ankle" }],
///   "states": [
///     { "label": "deep_squat", "category": "active", "lower": 0, "upper": 90 },
///     { "label": "partially_bent", "category": "active", "lower": 90, "upper": 160 },
///     { "label": "standing", "category": "rest", "lower": 160, "upper": 180 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub name: String,
    pub angles: Vec<JointTriple>,
    #[serde(default)]
    pub reduction: AngleReduction,
    #[serde(default = "default_min_visibility")]
    pub min_visibility: f32,
    pub states: Vec<StateRange>,
}

impl ExerciseConfig {
    pub fn from_json(json: &str) -> Result<Self, PoseError> {
        serde_json::from_str(json)
            .map_err(|e| PoseError::Config(format!("Failed to parse exercise config: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PoseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            PoseError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, PoseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Left-leg squat depth from the hip-knee-ankle angle.
    ///
    /// Above 160° is standing, above 90° partially bent, 90° and below a deep squat.
    pub fn squat_left() -> Self {
        Self {
            name: "squat_left".to_string(),
            angles: vec![JointTriple::new(
                Joint::LeftHip,
                Joint::LeftKnee,
                Joint::LeftAnkle,
            )],
            reduction: AngleReduction::First,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            states: squat_states(),
        }
    }

    /// Squat depth from the mean of both knee angles
    pub fn squat() -> Self {
        Self {
            name: "squat".to_string(),
            angles: vec![
                JointTriple::new(Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle),
                JointTriple::new(Joint::RightHip, Joint::RightKnee, Joint::RightAnkle),
            ],
            reduction: AngleReduction::Mean,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            states: squat_states(),
        }
    }

    /// Left-arm curl from the shoulder-elbow-wrist angle
    pub fn bicep_curl_left() -> Self {
        Self {
            name: "bicep_curl_left".to_string(),
            angles: vec![JointTriple::new(
                Joint::LeftShoulder,
                Joint::LeftElbow,
                Joint::LeftWrist,
            )],
            reduction: AngleReduction::First,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            states: vec![
                StateRange::new("curled", StateCategory::Active, 0.0, 50.0),
                StateRange::new("lifting", StateCategory::Active, 50.0, 150.0),
                StateRange::new("extended", StateCategory::Rest, 150.0, 180.0),
            ],
        }
    }

    /// Push-up depth from the more bent of the two elbows
    pub fn push_up() -> Self {
        Self {
            name: "push_up".to_string(),
            angles: vec![
                JointTriple::new(Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist),
                JointTriple::new(Joint::RightShoulder, Joint::RightElbow, Joint::RightWrist),
            ],
            reduction: AngleReduction::Min,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            states: vec![
                StateRange::new("down", StateCategory::Active, 0.0, 90.0),
                StateRange::new("lowering", StateCategory::Active, 90.0, 160.0),
                StateRange::new("up", StateCategory::Rest, 160.0, 180.0),
            ],
        }
    }

    /// Built-in exercise by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "squat_left" => Some(Self::squat_left()),
            "squat" => Some(Self::squat()),
            "bicep_curl_left" => Some(Self::bicep_curl_left()),
            "push_up" => Some(Self::push_up()),
            _ => None,
        }
    }
}

fn squat_states() -> Vec<StateRange> {
    vec![
        StateRange::new("deep_squat", StateCategory::Active, 0.0, 90.0),
        StateRange::new("partially_bent", StateCategory::Active, 90.0, 160.0),
        StateRange::new("standing", StateCategory::Rest, 160.0, 180.0),
    ]
}
