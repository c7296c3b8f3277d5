use crate::ExerciseState;

/// Counts repetitions from a stream of exercise states.
///
/// A repetition completes on every change from an `Active` state to a `Rest` state, e.g.
/// `deep_squat -> standing`. Entering an active state and repeating the current state never
/// count. The first observed state only initializes the counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepCounter {
    current: Option<ExerciseState>,
    previous: Option<ExerciseState>,
    count: u32,
}

impl RepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the state of the next frame. Returns true if it completed a repetition.
    pub fn observe(&mut self, state: &ExerciseState) -> bool {
        let completed = matches!(
            &self.current,
            Some(current) if current.is_active() && !state.is_active()
        );

        if self.current.as_ref() != Some(state) {
            self.previous = self.current.replace(state.clone());
        }
        if completed {
            self.count += 1;
        }
        completed
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `None` until the first state is observed
    pub fn current(&self) -> Option<&ExerciseState> {
        self.current.as_ref()
    }

    /// State before the most recent change
    pub fn previous(&self) -> Option<&ExerciseState> {
        self.previous.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
