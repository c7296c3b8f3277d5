use log::{debug, info, warn};

use crate::{
    AngleMeasurement, ExerciseConfig, ExerciseState, ExerciseStateClassifier, LandmarkFrame,
    PoseError, RepCounter,
};

/// Result of feeding one frame to a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub sequence: u64,
    pub state: ExerciseState,
    pub angle: f32,
    pub measurements: Vec<AngleMeasurement>,
    /// Repetitions completed so far, including this frame
    pub count: u32,
    pub rep_completed: bool,
    /// True when the state differs from the previous frame's (always true on the first frame)
    pub state_changed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub processed: u64,
    pub skipped: u64,
}

/// One exercise session over one camera stream.
///
/// Owns its classifier and repetition counter; use a separate session per stream.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    classifier: ExerciseStateClassifier,
    counter: RepCounter,
    stats: SessionStats,
}

impl ExerciseSession {
    pub fn new(classifier: ExerciseStateClassifier) -> Self {
        Self {
            classifier,
            counter: RepCounter::new(),
            stats: SessionStats::default(),
        }
    }

    pub fn from_config(config: ExerciseConfig) -> Result<Self, PoseError> {
        Ok(Self::new(ExerciseStateClassifier::new(config)?))
    }

    /// Classify `frame` and advance the repetition counter.
    ///
    /// A frame that cannot be classified is counted as skipped and leaves the current state
    /// and count untouched; the error is returned for the caller to report.
    pub fn process(&mut self, frame: &LandmarkFrame) -> Result<SessionUpdate, PoseError> {
        let classification = match self.classifier.classify(frame) {
            Ok(classification) => classification,
            Err(e) => {
                self.stats.skipped += 1;
                warn!("{}: skipping frame {}: {}", self.classifier.name(), frame.sequence(), e);
                return Err(e);
            }
        };

        let state_changed = self.counter.current() != Some(&classification.state);
        let rep_completed = self.counter.observe(&classification.state);
        self.stats.processed += 1;

        if rep_completed {
            info!(
                "{}: rep {} completed at frame {}",
                self.classifier.name(),
                self.counter.count(),
                classification.sequence
            );
        } else if state_changed {
            debug!(
                "{}: frame {} entered {}",
                self.classifier.name(),
                classification.sequence,
                classification.state
            );
        }

        Ok(SessionUpdate {
            sequence: classification.sequence,
            state: classification.state,
            angle: classification.angle,
            measurements: classification.measurements,
            count: self.counter.count(),
            rep_completed,
            state_changed,
        })
    }

    /// Start a new session: clears the count, the current state and the frame tallies.
    pub fn reset(&mut self) {
        self.counter.reset();
        self.stats = SessionStats::default();
    }

    pub fn count(&self) -> u32 {
        self.counter.count()
    }

    /// Last known state; `None` before the first classified frame
    pub fn current_state(&self) -> Option<&ExerciseState> {
        self.counter.current()
    }

    pub fn classifier(&self) -> &ExerciseStateClassifier {
        &self.classifier
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
