use gymguard_pose::{ExerciseSession, PoseError, SessionUpdate};

pub fn format_update(update: &SessionUpdate) -> String {
    let mut line = format!(
        "frame {:>5}  {:>6.1}°  {:<16} reps {}",
        update.sequence, update.angle, update.state.label, update.count
    );
    if update.measurements.len() > 1 {
        let parts: Vec<String> = update
            .measurements
            .iter()
            .map(|m| format!("{} {:.1}°", m.vertex, m.degrees))
            .collect();
        line.push_str(&format!("  ({})", parts.join(", ")));
    }
    if update.rep_completed {
        line.push_str("  +1");
    }
    line
}

pub fn format_skip(sequence: u64, error: &PoseError) -> String {
    format!("frame {:>5}  no reading: {}", sequence, error)
}

pub fn format_summary(session: &ExerciseSession) -> String {
    let stats = session.stats();
    format!(
        "{}: {} reps over {} frames ({} skipped)",
        session.classifier().name(),
        session.count(),
        stats.processed + stats.skipped,
        stats.skipped
    )
}
