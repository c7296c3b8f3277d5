//! Joint angles and exercise states from per-frame body landmarks.
//!
//! An external pose detector produces one [`LandmarkFrame`] per video frame. The
//! [`ExerciseStateClassifier`] measures the configured joint angles in that frame and maps
//! the result onto a discrete [`ExerciseState`]; an [`ExerciseSession`] additionally counts
//! repetitions across frames.

pub mod angle;
pub mod classifier;
pub mod config;
pub mod error;
pub mod joint;
pub mod landmark;
pub mod rep_counter;
pub mod session;
pub mod source;
pub mod state;

pub use angle::{joint_angle, measure, AngleMeasurement, JointTriple};
pub use classifier::{analyze_squat, Classification, ExerciseStateClassifier};
pub use config::{AngleReduction, ExerciseConfig, DEFAULT_MIN_VISIBILITY};
pub use error::{LandmarkIssue, PoseError};
pub use joint::{Joint, Skeleton, COCO_KEYPOINT_COUNT, MEDIAPIPE_LANDMARK_COUNT};
pub use landmark::{Landmark, LandmarkFrame};
pub use rep_counter::RepCounter;
pub use session::{ExerciseSession, SessionStats, SessionUpdate};
pub use source::{JsonLinesSource, PoseSource};
pub use state::{ExerciseState, StateCategory, StateRange, StateTable};
