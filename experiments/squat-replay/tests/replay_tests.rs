use std::path::Path;
use std::process::Command;

fn replay() -> Command {
    Command::new(env!("CARGO_BIN_EXE_squat-replay"))
}

#[test]
fn test_missing_recording_argument_exits_with_one() {
    let output = replay().output().expect("Failed to run squat-replay");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn test_sample_recording_counts_two_reps() {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/squat.jsonl");
    let output = replay()
        .arg(&data)
        .env_remove("GYMGUARD_LOG_DIR")
        .output()
        .expect("Failed to run squat-replay");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = stdout.lines().last().unwrap();
    assert!(summary.starts_with("squat_left: 2 reps"), "{summary}");
    assert!(summary.ends_with("(1 skipped)"), "{summary}");
}

#[test]
fn test_recording_without_visibility_fails() {
    let path = std::env::temp_dir().join("gymguard-replay-no-visibility.jsonl");
    std::fs::write(
        &path,
        "{\"landmarks\": {\"left_hip\": {\"x\": 0.5, \"y\": 0.3}}}\n",
    )
    .unwrap();

    let output = replay().arg(&path).output().expect("Failed to run squat-replay");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));

    let _ = std::fs::remove_file(&path);
}
