use std::fmt;

use crate::joint::Joint;

/// Why a required landmark could not be used
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandmarkIssue {
    Missing,
    LowConfidence { visibility: f32, minimum: f32 },
}

impl fmt::Display for LandmarkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkIssue::Missing => write!(f, "missing"),
            LandmarkIssue::LowConfidence {
                visibility,
                minimum,
            } => write!(f, "visibility {visibility:.2} below {minimum:.2}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    /// The angle vertex coincides with an endpoint, or a coordinate is not finite.
    DegenerateGeometry {
        vertex: Option<Joint>,
        sequence: Option<u64>,
        reason: String,
    },
    /// A required landmark is absent or below the confidence threshold.
    InsufficientLandmarks {
        sequence: u64,
        joints: Vec<(Joint, LandmarkIssue)>,
    },
    /// The angle ranges do not partition [0, 180].
    InvalidStateRangeConfig(String),
    /// Unknown joint name or skeleton index.
    InvalidJoint(String),
    /// Exercise configuration could not be read, parsed or accepted.
    Config(String),
    /// The frame source failed to produce a frame.
    Source(String),
}

impl PoseError {
    /// Per-frame errors leave the session usable; the caller drops the frame and continues.
    pub fn is_frame_local(&self) -> bool {
        matches!(
            self,
            PoseError::DegenerateGeometry { .. } | PoseError::InsufficientLandmarks { .. }
        )
    }

    /// Attach the vertex joint and frame to a geometry error raised on bare points.
    pub(crate) fn at(self, joint: Joint, frame: u64) -> Self {
        match self {
            PoseError::DegenerateGeometry { reason, .. } => PoseError::DegenerateGeometry {
                vertex: Some(joint),
                sequence: Some(frame),
                reason,
            },
            other => other,
        }
    }
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::DegenerateGeometry {
                vertex,
                sequence,
                reason,
            } => {
                write!(f, "degenerate geometry")?;
                if let Some(vertex) = vertex {
                    write!(f, " at {vertex}")?;
                }
                if let Some(sequence) = sequence {
                    write!(f, " in frame {sequence}")?;
                }
                write!(f, ": {reason}")
            }
            PoseError::InsufficientLandmarks { sequence, joints } => {
                write!(f, "insufficient landmarks in frame {sequence}: ")?;
                for (i, (joint, issue)) in joints.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{joint} ({issue})")?;
                }
                Ok(())
            }
            PoseError::InvalidStateRangeConfig(msg) => {
                write!(f, "invalid state range config: {msg}")
            }
            PoseError::InvalidJoint(msg) => write!(f, "invalid joint: {msg}"),
            PoseError::Config(msg) => write!(f, "config error: {msg}"),
            PoseError::Source(msg) => write!(f, "source error: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        PoseError::Config(err.to_string())
    }
}
