use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use super::recognizer::LandmarkDetector;
use crate::types::Point2D;

/// One recorded frame: the landmarks the detector produced, or `None` for no hand.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceFrame {
    pub index: usize,
    pub landmarks: Option<Vec<Point2D>>,
}

/// Parses a JSON-lines landmark trace. Each non-blank line is `null` or an
/// array of `[x, y]` pixel pairs.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TraceFrame>> {
    let mut frames = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read trace line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let landmarks: Option<Vec<Point2D>> = serde_json::from_str(line)
            .with_context(|| format!("invalid landmarks on trace line {}", line_no + 1))?;
        frames.push(TraceFrame {
            index: frames.len(),
            landmarks,
        });
    }
    Ok(frames)
}

pub fn load_trace(path: &Path) -> Result<Vec<TraceFrame>> {
    let file =
        File::open(path).with_context(|| format!("failed to open trace {}", path.display()))?;
    let frames = parse_trace(BufReader::new(file))
        .with_context(|| format!("failed to parse trace {}", path.display()))?;
    log::info!("loaded {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

/// Replays recorded landmarks as if they came from a live model.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceDetector;

impl LandmarkDetector for TraceDetector {
    type Frame = TraceFrame;

    fn detect(&mut self, frame: &TraceFrame) -> Result<Option<Vec<Point2D>>> {
        Ok(frame.landmarks.clone())
    }
}
