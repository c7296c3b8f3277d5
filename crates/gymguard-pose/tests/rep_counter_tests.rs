use gymguard_pose::{ExerciseState, RepCounter, StateCategory};

fn standing() -> ExerciseState {
    ExerciseState::new("standing", StateCategory::Rest)
}

fn partially_bent() -> ExerciseState {
    ExerciseState::new("partially_bent", StateCategory::Active)
}

fn deep_squat() -> ExerciseState {
    ExerciseState::new("deep_squat", StateCategory::Active)
}

#[test]
fn test_new_counter_is_uninitialized() {
    let counter = RepCounter::new();
    assert_eq!(counter.count(), 0);
    assert!(counter.current().is_none());
    assert!(counter.previous().is_none());
}

#[test]
fn test_full_squat_counts_once_on_return_to_standing() {
    let mut counter = RepCounter::new();
    let sequence = [
        standing(),
        partially_bent(),
        deep_squat(),
        partially_bent(),
        standing(),
    ];

    let completed: Vec<bool> = sequence.iter().map(|s| counter.observe(s)).collect();

    assert_eq!(completed, vec![false, false, false, false, true]);
    assert_eq!(counter.count(), 1);
    assert_eq!(counter.current(), Some(&standing()));
    assert_eq!(counter.previous(), Some(&partially_bent()));
}

#[test]
fn test_first_observation_never_counts() {
    let mut counter = RepCounter::new();
    assert!(!counter.observe(&standing()));
    assert_eq!(counter.count(), 0);

    let mut counter = RepCounter::new();
    assert!(!counter.observe(&deep_squat()));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_rest_to_active_does_not_count() {
    let mut counter = RepCounter::new();
    counter.observe(&standing());
    assert!(!counter.observe(&deep_squat()));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_same_state_repeats_do_not_count_or_shift_history() {
    let mut counter = RepCounter::new();
    counter.observe(&deep_squat());
    counter.observe(&standing());
    assert_eq!(counter.count(), 1);

    for _ in 0..5 {
        assert!(!counter.observe(&standing()));
    }
    assert_eq!(counter.count(), 1);
    assert_eq!(counter.previous(), Some(&deep_squat()));
}

#[test]
fn test_active_to_active_does_not_count() {
    let mut counter = RepCounter::new();
    counter.observe(&partially_bent());
    assert!(!counter.observe(&deep_squat()));
    assert!(!counter.observe(&partially_bent()));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_several_reps() {
    let mut counter = RepCounter::new();
    counter.observe(&standing());
    for _ in 0..3 {
        counter.observe(&partially_bent());
        counter.observe(&deep_squat());
        counter.observe(&standing());
    }
    assert_eq!(counter.count(), 3);
}

#[test]
fn test_reset_returns_to_uninitialized() {
    let mut counter = RepCounter::new();
    counter.observe(&deep_squat());
    counter.observe(&standing());
    counter.reset();

    assert_eq!(counter, RepCounter::new());
    // first observation after reset only initializes
    assert!(!counter.observe(&standing()));
    assert_eq!(counter.count(), 0);
}
