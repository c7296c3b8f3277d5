use log::debug;

use crate::{
    measure, AngleMeasurement, AngleReduction, ExerciseConfig, ExerciseState, Joint, JointTriple,
    LandmarkFrame, PoseError, StateTable,
};

/// State of one frame as seen by a classifier
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub sequence: u64,
    pub state: ExerciseState,
    /// Angle the state was selected from, after reduction
    pub angle: f32,
    /// One measurement per configured joint triple, in config order
    pub measurements: Vec<AngleMeasurement>,
}

/// Maps the joint angles of a frame onto a configured exercise state
#[derive(Debug, Clone)]
pub struct ExerciseStateClassifier {
    name: String,
    angles: Vec<JointTriple>,
    reduction: AngleReduction,
    min_visibility: f32,
    required: Vec<Joint>,
    table: StateTable,
}

impl ExerciseStateClassifier {
    /// Validate `config` and build the classifier.
    ///
    /// Fails with `InvalidStateRangeConfig` if the state ranges do not partition [0, 180],
    /// and with `Config` for a config without angles, with a triple reusing a joint, or with
    /// a minimum visibility outside [0, 1].
    pub fn new(config: ExerciseConfig) -> Result<Self, PoseError> {
        let table = StateTable::new(&config.states)?;

        if config.angles.is_empty() {
            return Err(PoseError::Config(format!(
                "exercise '{}' measures no angles",
                config.name
            )));
        }
        for triple in &config.angles {
            let [proximal, vertex, distal] = triple.joints();
            if proximal == vertex || vertex == distal || proximal == distal {
                return Err(PoseError::Config(format!(
                    "exercise '{}': angle at {} repeats a joint",
                    config.name, triple.vertex
                )));
            }
        }
        if !(0.0..=1.0).contains(&config.min_visibility) {
            return Err(PoseError::Config(format!(
                "exercise '{}': min_visibility {} outside [0, 1]",
                config.name, config.min_visibility
            )));
        }

        let mut required = Vec::new();
        for joint in config.angles.iter().flat_map(JointTriple::joints) {
            if !required.contains(&joint) {
                required.push(joint);
            }
        }

        Ok(Self {
            name: config.name,
            angles: config.angles,
            reduction: config.reduction,
            min_visibility: config.min_visibility,
            required,
            table,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Joints a frame must carry, in first-use order
    pub fn required_joints(&self) -> &[Joint] {
        &self.required
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// State for an angle in [0, 180]
    pub fn state_for(&self, angle: f32) -> Option<&ExerciseState> {
        self.table.state_for(angle)
    }

    /// Classify one frame. Does not depend on any earlier frame.
    pub fn classify(&self, frame: &LandmarkFrame) -> Result<Classification, PoseError> {
        let issues = frame.check(&self.required, self.min_visibility);
        if !issues.is_empty() {
            return Err(PoseError::InsufficientLandmarks {
                sequence: frame.sequence(),
                joints: issues,
            });
        }

        let measurements = self
            .angles
            .iter()
            .map(|triple| measure(frame, triple, self.min_visibility))
            .collect::<Result<Vec<_>, _>>()?;

        let degrees: Vec<f32> = measurements.iter().map(|m| m.degrees).collect();
        let angle = self.reduction.reduce(&degrees).ok_or_else(|| {
            PoseError::Config(format!("exercise '{}' measures no angles", self.name))
        })?;

        let state = self
            .table
            .state_for(angle)
            .cloned()
            .ok_or_else(|| PoseError::DegenerateGeometry {
                vertex: measurements.first().map(|m| m.vertex),
                sequence: Some(frame.sequence()),
                reason: format!("angle {angle} outside [0, 180]"),
            })?;

        debug!(
            "{}: frame {} angle {:.1} -> {}",
            self.name,
            frame.sequence(),
            angle,
            state
        );

        Ok(Classification {
            sequence: frame.sequence(),
            state,
            angle,
            measurements,
        })
    }
}

/// Single-frame squat analysis on the left leg: knee angle and state.
pub fn analyze_squat(frame: &LandmarkFrame) -> Result<(f32, ExerciseState), PoseError> {
    let classifier = ExerciseStateClassifier::new(ExerciseConfig::squat_left())?;
    let classification = classifier.classify(frame)?;
    Ok((classification.angle, classification.state))
}
