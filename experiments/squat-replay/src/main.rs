mod report;

use anyhow::{Context, Result};
use gymguard_base::{init_file_logger, init_stdout_logger, log_fatal};
use gymguard_pose::{ExerciseConfig, ExerciseSession, JsonLinesSource, PoseSource};
use log::info;
use report::{format_skip, format_summary, format_update};
use std::env;
use std::path::Path;

const DEFAULT_EXERCISE: &str = "squat_left";

/// Built-in preset name, or path to a JSON exercise config
fn load_exercise(arg: Option<&str>) -> Result<ExerciseConfig> {
    let arg = arg.unwrap_or(DEFAULT_EXERCISE);
    if let Some(config) = ExerciseConfig::preset(arg) {
        return Ok(config);
    }
    ExerciseConfig::from_file(Path::new(arg))
        .with_context(|| format!("'{}' is neither a preset nor a readable config", arg))
}

fn main() -> Result<()> {
    match env::var("GYMGUARD_LOG_DIR") {
        Ok(dir) => init_file_logger(&dir).with_context(|| format!("log directory {}", dir))?,
        Err(_) => init_stdout_logger(),
    }

    let args: Vec<String> = env::args().collect();
    let Some(recording) = args.get(1) else {
        eprintln!("usage: squat-replay <frames.jsonl> [preset | config.json]");
        eprintln!("presets: squat_left, squat, bicep_curl_left, push_up");
        std::process::exit(1);
    };

    let config = load_exercise(args.get(2).map(String::as_str))?;
    let mut session = ExerciseSession::from_config(config)?;
    let mut source = JsonLinesSource::open(recording)?;

    info!(
        "replaying {} as '{}' (joints: {:?})",
        recording,
        session.classifier().name(),
        session.classifier().required_joints()
    );

    while let Some(frame) = source.next_frame()? {
        log::trace!("{}", frame);
        match session.process(&frame) {
            Ok(update) => println!("{}", format_update(&update)),
            Err(e) if e.is_frame_local() => println!("{}", format_skip(frame.sequence(), &e)),
            Err(e) => log_fatal!("stopping at frame {}: {}", frame.sequence(), e),
        }
    }

    println!("{}", format_summary(&session));
    Ok(())
}
