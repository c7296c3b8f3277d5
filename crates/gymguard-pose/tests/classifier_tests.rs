use gymguard_pose::{
    analyze_squat, AngleReduction, ExerciseConfig, ExerciseStateClassifier, Joint, JointTriple,
    Landmark, LandmarkFrame, LandmarkIssue, PoseError, StateCategory,
};

fn leg_frame(sequence: u64, hip: (f32, f32), knee: (f32, f32), ankle: (f32, f32)) -> LandmarkFrame {
    LandmarkFrame::from_landmarks(
        sequence,
        [
            (Joint::LeftHip, Landmark::new(hip.0, hip.1, 0.99)),
            (Joint::LeftKnee, Landmark::new(knee.0, knee.1, 0.98)),
            (Joint::LeftAnkle, Landmark::new(ankle.0, ankle.1, 0.97)),
            (Joint::Nose, Landmark::new(0.5, 0.1, 0.99)),
        ],
    )
}

fn squat_left() -> ExerciseStateClassifier {
    ExerciseStateClassifier::new(ExerciseConfig::squat_left()).expect("valid preset")
}

#[test]
fn test_straight_leg_is_standing() {
    let frame = leg_frame(0, (0.5, 0.3), (0.5, 0.6), (0.5, 0.9));
    let result = squat_left().classify(&frame).unwrap();

    assert_eq!(result.state.label, "standing");
    assert_eq!(result.state.category, StateCategory::Rest);
    assert!((result.angle - 180.0).abs() < 0.01);
    assert_eq!(result.measurements.len(), 1);
    assert_eq!(result.measurements[0].vertex, Joint::LeftKnee);
}

#[test]
fn test_acute_knee_is_deep_squat() {
    // atan2(0.1, -0.2) - 90° = 63.43°
    let frame = leg_frame(1, (0.3, 0.7), (0.5, 0.6), (0.5, 0.9));
    let result = squat_left().classify(&frame).unwrap();

    assert!((result.angle - 63.435).abs() < 0.01);
    assert_eq!(result.state.label, "deep_squat");
}

#[test]
fn test_half_bent_knee_is_partially_bent() {
    // 135° at the knee
    let frame = leg_frame(2, (0.3, 0.4), (0.5, 0.6), (0.5, 0.9));
    let result = squat_left().classify(&frame).unwrap();

    assert!((result.angle - 135.0).abs() < 0.01);
    assert_eq!(result.state.label, "partially_bent");
}

#[test]
fn test_boundary_160_is_partially_bent() {
    let classifier = squat_left();
    assert_eq!(classifier.state_for(160.0).unwrap().label, "partially_bent");
    assert_eq!(classifier.state_for(160.01).unwrap().label, "standing");
    assert_eq!(classifier.state_for(90.0).unwrap().label, "deep_squat");
}

#[test]
fn test_missing_ankle_is_named() {
    let frame = LandmarkFrame::from_landmarks(
        7,
        [
            (Joint::LeftHip, Landmark::new(0.5, 0.3, 0.99)),
            (Joint::LeftKnee, Landmark::new(0.5, 0.6, 0.99)),
        ],
    );

    match squat_left().classify(&frame) {
        Err(PoseError::InsufficientLandmarks { sequence, joints }) => {
            assert_eq!(sequence, 7);
            assert_eq!(joints, vec![(Joint::LeftAnkle, LandmarkIssue::Missing)]);
        }
        other => panic!("expected InsufficientLandmarks, got {other:?}"),
    }
}

#[test]
fn test_low_confidence_uses_configured_minimum() {
    let frame = LandmarkFrame::from_landmarks(
        0,
        [
            (Joint::LeftHip, Landmark::new(0.5, 0.3, 0.99)),
            (Joint::LeftKnee, Landmark::new(0.5, 0.6, 0.4)),
            (Joint::LeftAnkle, Landmark::new(0.5, 0.9, 0.99)),
        ],
    );

    let strict = squat_left();
    let err = strict.classify(&frame).unwrap_err();
    assert!(err.to_string().contains("left_knee"));
    assert!(err.is_frame_local());

    let mut config = ExerciseConfig::squat_left();
    config.min_visibility = 0.3;
    let lenient = ExerciseStateClassifier::new(config).unwrap();
    assert_eq!(lenient.classify(&frame).unwrap().state.label, "standing");
}

#[test]
fn test_visibility_at_minimum_is_accepted() {
    let frame = LandmarkFrame::from_landmarks(
        0,
        [
            (Joint::LeftHip, Landmark::new(0.5, 0.3, 0.5)),
            (Joint::LeftKnee, Landmark::new(0.5, 0.6, 0.5)),
            (Joint::LeftAnkle, Landmark::new(0.5, 0.9, 0.5)),
        ],
    );
    assert!(squat_left().classify(&frame).is_ok());
}

#[test]
fn test_classify_is_repeatable() {
    let classifier = squat_left();
    let frame = leg_frame(4, (0.3, 0.4), (0.5, 0.6), (0.5, 0.9));

    let first = classifier.classify(&frame).unwrap();
    let second = classifier.classify(&frame).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_required_joints_deduplicated() {
    let classifier = ExerciseStateClassifier::new(ExerciseConfig::squat()).unwrap();
    assert_eq!(
        classifier.required_joints(),
        &[
            Joint::LeftHip,
            Joint::LeftKnee,
            Joint::LeftAnkle,
            Joint::RightHip,
            Joint::RightKnee,
            Joint::RightAnkle,
        ]
    );
}

#[test]
fn test_both_legs_mean_angle() {
    // left knee straight (180°), right knee at atan(3) = 71.57°
    let frame = LandmarkFrame::from_landmarks(
        0,
        [
            (Joint::LeftHip, Landmark::new(0.4, 0.3, 0.9)),
            (Joint::LeftKnee, Landmark::new(0.4, 0.6, 0.9)),
            (Joint::LeftAnkle, Landmark::new(0.4, 0.9, 0.9)),
            (Joint::RightHip, Landmark::new(0.8, 0.6, 0.9)),
            (Joint::RightKnee, Landmark::new(0.6, 0.6, 0.9)),
            (Joint::RightAnkle, Landmark::new(0.7, 0.9, 0.9)),
        ],
    );

    let classifier = ExerciseStateClassifier::new(ExerciseConfig::squat()).unwrap();
    let result = classifier.classify(&frame).unwrap();
    assert_eq!(result.measurements.len(), 2);
    assert!((result.angle - 125.7825).abs() < 0.01);
    assert_eq!(result.state.label, "partially_bent");

    let mut config = ExerciseConfig::squat();
    config.reduction = AngleReduction::Min;
    let deepest = ExerciseStateClassifier::new(config).unwrap();
    assert_eq!(deepest.classify(&frame).unwrap().state.label, "deep_squat");
}

#[test]
fn test_second_leg_missing_reports_all_offenders() {
    let frame = leg_frame(9, (0.5, 0.3), (0.5, 0.6), (0.5, 0.9));
    let classifier = ExerciseStateClassifier::new(ExerciseConfig::squat()).unwrap();

    match classifier.classify(&frame) {
        Err(PoseError::InsufficientLandmarks { joints, .. }) => {
            let names: Vec<Joint> = joints.iter().map(|(joint, _)| *joint).collect();
            assert_eq!(
                names,
                vec![Joint::RightHip, Joint::RightKnee, Joint::RightAnkle]
            );
        }
        other => panic!("expected InsufficientLandmarks, got {other:?}"),
    }
}

#[test]
fn test_degenerate_frame_is_frame_local() {
    let frame = leg_frame(5, (0.5, 0.6), (0.5, 0.6), (0.5, 0.9));
    let err = squat_left().classify(&frame).unwrap_err();
    assert!(matches!(err, PoseError::DegenerateGeometry { .. }));
    assert!(err.is_frame_local());
}

#[test]
fn test_bad_ranges_fail_at_construction() {
    let mut config = ExerciseConfig::squat_left();
    config.states[0].upper = 80.0;
    assert!(matches!(
        ExerciseStateClassifier::new(config),
        Err(PoseError::InvalidStateRangeConfig(_))
    ));
}

#[test]
fn test_config_without_angles_rejected() {
    let mut config = ExerciseConfig::squat_left();
    config.angles.clear();
    let err = ExerciseStateClassifier::new(config).unwrap_err();
    assert!(matches!(err, PoseError::Config(_)));
    assert!(!err.is_frame_local());
}

#[test]
fn test_repeated_joint_rejected() {
    let mut config = ExerciseConfig::squat_left();
    config.angles = vec![JointTriple::new(Joint::LeftKnee, Joint::LeftKnee, Joint::LeftAnkle)];
    assert!(matches!(
        ExerciseStateClassifier::new(config),
        Err(PoseError::Config(_))
    ));
}

#[test]
fn test_min_visibility_out_of_range_rejected() {
    let mut config = ExerciseConfig::squat_left();
    config.min_visibility = 1.5;
    assert!(matches!(
        ExerciseStateClassifier::new(config),
        Err(PoseError::Config(_))
    ));
}

#[test]
fn test_analyze_squat() {
    let frame = leg_frame(0, (0.3, 0.7), (0.5, 0.6), (0.5, 0.9));
    let (angle, state) = analyze_squat(&frame).unwrap();
    assert!((angle - 63.435).abs() < 0.01);
    assert_eq!(state.label, "deep_squat");
}
