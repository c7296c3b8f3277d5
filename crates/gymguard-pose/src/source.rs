use std::{
    collections::{BTreeMap, VecDeque},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;

use crate::{Joint, Landmark, LandmarkFrame, PoseError};

/// Handle to an external pose detector, owned by the caller.
///
/// Each call yields the landmarks of the next frame, or `None` once the stream ends.
pub trait PoseSource {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>, PoseError>;
}

/// Frames already in memory, yielded front to back
impl PoseSource for VecDeque<LandmarkFrame> {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>, PoseError> {
        Ok(self.pop_front())
    }
}

#[derive(Deserialize)]
struct FrameRecord {
    sequence: Option<u64>,
    landmarks: BTreeMap<String, LandmarkRecord>,
}

#[derive(Deserialize)]
struct LandmarkRecord {
    x: f32,
    y: f32,
    #[serde(default)]
    z: Option<f32>,
    visibility: f32,
}

/// Replays recorded detector output, one JSON object per line:
///
/// ```json
/// {"sequence": 0, "landmarks": {"left_hip": {"x": 0.5, "y": 0.3, "visibility": 0.98}}}
/// ```
///
/// `visibility` is required and `z` is optional. A missing `sequence` continues from the
/// previous frame's, starting at 0. Blank lines are skipped.
pub struct JsonLinesSource<R> {
    reader: R,
    line: String,
    line_number: usize,
    next_sequence: u64,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            next_sequence: 0,
        }
    }

    fn parse_line(&self, line: &str) -> Result<LandmarkFrame, PoseError> {
        let record: FrameRecord = serde_json::from_str(line)
            .map_err(|e| PoseError::Source(format!("line {}: {}", self.line_number, e)))?;

        let mut landmarks = Vec::with_capacity(record.landmarks.len());
        for (name, lm) in record.landmarks {
            let joint: Joint = name
                .parse()
                .map_err(|e| PoseError::Source(format!("line {}: {}", self.line_number, e)))?;
            let mut landmark = Landmark::new(lm.x, lm.y, lm.visibility);
            landmark.z = lm.z;
            landmarks.push((joint, landmark));
        }

        Ok(LandmarkFrame::from_landmarks(
            record.sequence.unwrap_or(self.next_sequence),
            landmarks,
        ))
    }
}

impl JsonLinesSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PoseError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PoseError::Source(format!("Failed to open {}: {}", path.display(), e)))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> PoseSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>, PoseError> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| PoseError::Source(format!("line {}: {}", self.line_number + 1, e)))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }

            let frame = self.parse_line(line)?;
            self.next_sequence = frame.sequence().saturating_add(1);
            return Ok(Some(frame));
        }
    }
}
