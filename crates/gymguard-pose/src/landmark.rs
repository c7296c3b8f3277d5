use std::{collections::HashMap, fmt};

use gymguard_base::Vec2;

use crate::{Joint, LandmarkIssue, PoseError, Skeleton};

/// One detected keypoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Normalized [0, 1] image coordinates or pixel coordinates, as produced by the detector.
    pub position: Vec2<f32>,
    /// Relative depth, when the detector provides one. Not used for angle measurement.
    pub z: Option<f32>,
    /// Visibility/confidence score in [0.0, 1.0]
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            z: None,
            visibility,
        }
    }

    pub fn with_z(self, z: f32) -> Self {
        Self { z: Some(z), ..self }
    }

    /// NaN visibility never passes.
    pub fn is_visible(&self, min_visibility: f32) -> bool {
        self.visibility >= min_visibility
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.3}, y={:.3}, ", self.position.x, self.position.y)?;
        match self.z {
            Some(z) => write!(f, "z={z:.3}, ")?,
            None => write!(f, "z=-, ")?,
        }
        write!(f, "visibility={:.3}", self.visibility)
    }
}

/// Landmarks from a single detection pass.
///
/// Holds any subset of the joint vocabulary; occluded joints are simply absent or carry a
/// low visibility. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    sequence: u64,
    landmarks: HashMap<Joint, Landmark>,
}

impl LandmarkFrame {
    /// Build a frame from joint/landmark pairs. A repeated joint keeps its last landmark.
    pub fn from_landmarks(
        sequence: u64,
        landmarks: impl IntoIterator<Item = (Joint, Landmark)>,
    ) -> Self {
        Self {
            sequence,
            landmarks: landmarks.into_iter().collect(),
        }
    }

    /// Build a frame from a detector's index-ordered output.
    ///
    /// Fewer landmarks than the skeleton defines is fine, more is an error.
    pub fn from_skeleton(
        sequence: u64,
        skeleton: Skeleton,
        landmarks: &[Landmark],
    ) -> Result<Self, PoseError> {
        let mut map = HashMap::with_capacity(landmarks.len());
        for (index, landmark) in landmarks.iter().enumerate() {
            map.insert(skeleton.joint(index)?, *landmark);
        }
        Ok(Self {
            sequence,
            landmarks: map,
        })
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn get(&self, joint: Joint) -> Option<&Landmark> {
        self.landmarks.get(&joint)
    }

    pub fn contains(&self, joint: Joint) -> bool {
        self.landmarks.contains_key(&joint)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Joints present in this frame, in MediaPipe index order
    pub fn joints(&self) -> Vec<Joint> {
        let mut joints: Vec<Joint> = self.landmarks.keys().copied().collect();
        joints.sort();
        joints
    }

    /// Report every joint in `required` that is absent or below `min_visibility`.
    ///
    /// Empty result means all joints are usable. Order follows `required`, duplicates
    /// reported once.
    pub fn check(&self, required: &[Joint], min_visibility: f32) -> Vec<(Joint, LandmarkIssue)> {
        let mut issues: Vec<(Joint, LandmarkIssue)> = Vec::new();
        for &joint in required {
            if issues.iter().any(|(seen, _)| *seen == joint) {
                continue;
            }
            match self.landmarks.get(&joint) {
                None => issues.push((joint, LandmarkIssue::Missing)),
                Some(landmark) if !landmark.is_visible(min_visibility) => issues.push((
                    joint,
                    LandmarkIssue::LowConfidence {
                        visibility: landmark.visibility,
                        minimum: min_visibility,
                    },
                )),
                Some(_) => {}
            }
        }
        issues
    }

    /// Positions of `required`, or InsufficientLandmarks naming every unusable joint.
    pub fn positions<const N: usize>(
        &self,
        required: [Joint; N],
        min_visibility: f32,
    ) -> Result<[Vec2<f32>; N], PoseError> {
        let issues = self.check(&required, min_visibility);
        if !issues.is_empty() {
            return Err(PoseError::InsufficientLandmarks {
                sequence: self.sequence,
                joints: issues,
            });
        }
        // check() guarantees presence
        Ok(required.map(|joint| {
            self.landmarks
                .get(&joint)
                .map(|landmark| landmark.position)
                .unwrap_or_default()
        }))
    }
}

impl fmt::Display for LandmarkFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} ({} landmarks)", self.sequence, self.landmarks.len())?;
        for joint in self.joints() {
            if let Some(landmark) = self.landmarks.get(&joint) {
                write!(f, "\n  {joint}: {landmark}")?;
            }
        }
        Ok(())
    }
}
