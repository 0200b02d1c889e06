pub mod recognizer;
pub mod replay;
pub mod watchdog;
pub mod worker;

// Re-exports for convenience
pub use recognizer::{LandmarkDetector, RecognitionSession, RecognizerHandle, start_recognizer};
pub use replay::{TraceDetector, TraceFrame, load_trace, parse_trace};
pub use watchdog::{PlayerStatus, WatchdogHandle, start_watchdog};
pub use worker::WorkerHandle;
