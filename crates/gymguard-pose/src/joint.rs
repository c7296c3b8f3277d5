use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::PoseError;

/// Number of landmarks in the MediaPipe pose skeleton
pub const MEDIAPIPE_LANDMARK_COUNT: usize = 33;

/// Number of keypoints in COCO pose format
pub const COCO_KEYPOINT_COUNT: usize = 17;

/// Anatomical landmark identifier.
///
/// Discriminants follow MediaPipe pose landmark indices. COCO keypoints map onto the
/// same identifiers through [`Skeleton::Coco17`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

const MEDIAPIPE_JOINTS: [Joint; MEDIAPIPE_LANDMARK_COUNT] = [
    Joint::Nose,
    Joint::LeftEyeInner,
    Joint::LeftEye,
    Joint::LeftEyeOuter,
    Joint::RightEyeInner,
    Joint::RightEye,
    Joint::RightEyeOuter,
    Joint::LeftEar,
    Joint::RightEar,
    Joint::MouthLeft,
    Joint::MouthRight,
    Joint::LeftShoulder,
    Joint::RightShoulder,
    Joint::LeftElbow,
    Joint::RightElbow,
    Joint::LeftWrist,
    Joint::RightWrist,
    Joint::LeftPinky,
    Joint::RightPinky,
    Joint::LeftIndex,
    Joint::RightIndex,
    Joint::LeftThumb,
    Joint::RightThumb,
    Joint::LeftHip,
    Joint::RightHip,
    Joint::LeftKnee,
    Joint::RightKnee,
    Joint::LeftAnkle,
    Joint::RightAnkle,
    Joint::LeftHeel,
    Joint::RightHeel,
    Joint::LeftFootIndex,
    Joint::RightFootIndex,
];

const COCO_JOINTS: [Joint; COCO_KEYPOINT_COUNT] = [
    Joint::Nose,
    Joint::LeftEye,
    Joint::RightEye,
    Joint::LeftEar,
    Joint::RightEar,
    Joint::LeftShoulder,
    Joint::RightShoulder,
    Joint::LeftElbow,
    Joint::RightElbow,
    Joint::LeftWrist,
    Joint::RightWrist,
    Joint::LeftHip,
    Joint::RightHip,
    Joint::LeftKnee,
    Joint::RightKnee,
    Joint::LeftAnkle,
    Joint::RightAnkle,
];

impl Joint {
    /// Every joint in MediaPipe index order
    pub const ALL: &'static [Joint] = &MEDIAPIPE_JOINTS;

    /// snake_case name used in configuration files and log output
    pub fn name(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEyeInner => "left_eye_inner",
            Joint::LeftEye => "left_eye",
            Joint::LeftEyeOuter => "left_eye_outer",
            Joint::RightEyeInner => "right_eye_inner",
            Joint::RightEye => "right_eye",
            Joint::RightEyeOuter => "right_eye_outer",
            Joint::LeftEar => "left_ear",
            Joint::RightEar => "right_ear",
            Joint::MouthLeft => "mouth_left",
            Joint::MouthRight => "mouth_right",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftPinky => "left_pinky",
            Joint::RightPinky => "right_pinky",
            Joint::LeftIndex => "left_index",
            Joint::RightIndex => "right_index",
            Joint::LeftThumb => "left_thumb",
            Joint::RightThumb => "right_thumb",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
            Joint::LeftHeel => "left_heel",
            Joint::RightHeel => "right_heel",
            Joint::LeftFootIndex => "left_foot_index",
            Joint::RightFootIndex => "right_foot_index",
        }
    }
}

impl From<Joint> for usize {
    fn from(joint: Joint) -> usize {
        joint as usize
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Joint {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Joint::ALL
            .iter()
            .copied()
            .find(|joint| joint.name() == wanted)
            .ok_or_else(|| PoseError::InvalidJoint(format!("unknown joint name '{s}'")))
    }
}

/// Keypoint layout of a pose detector's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skeleton {
    MediaPipe33,
    Coco17,
}

impl Skeleton {
    /// Joints in the detector's output order
    pub fn joints(self) -> &'static [Joint] {
        match self {
            Skeleton::MediaPipe33 => &MEDIAPIPE_JOINTS,
            Skeleton::Coco17 => &COCO_JOINTS,
        }
    }

    pub fn joint_count(self) -> usize {
        self.joints().len()
    }

    /// Joint at the detector's output index
    pub fn joint(self, index: usize) -> Result<Joint, PoseError> {
        self.joints().get(index).copied().ok_or_else(|| {
            PoseError::InvalidJoint(format!(
                "index {index} out of range for {self:?} (0-{})",
                self.joint_count() - 1
            ))
        })
    }

    pub fn contains(self, joint: Joint) -> bool {
        self.joints().contains(&joint)
    }
}
