use thiserror::Error;

/// Per-frame recognition failures. Both are recoverable: the frame carries no gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("no hand detected in frame")]
    NoHandDetected,
    #[error("expected 21 hand landmarks, found {found}")]
    InvalidLandmarkCount { found: usize },
}
