pub mod config;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod motion;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use config::{Config, Thresholds};
pub use dispatch::{CommandSink, Debouncer};
pub use error::RecognitionError;
pub use gesture::{GestureRecognizer, Recognition};
pub use types::{Command, FingerStates, LandmarkSet, Point2D};
