use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use super::worker::WorkerHandle;
use crate::{
    config::Config,
    dispatch::{CommandSink, Debouncer},
    gesture::GestureRecognizer,
    types::{Command, Point2D},
};

const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Source of hand landmarks for a frame (the pose-estimation model).
pub trait LandmarkDetector: Send + 'static {
    type Frame: Send + 'static;

    /// `Ok(None)` when no hand is visible.
    fn detect(&mut self, frame: &Self::Frame) -> anyhow::Result<Option<Vec<Point2D>>>;
}

/// All state carried between frames: motion history and the debounce gate.
pub struct RecognitionSession {
    recognizer: GestureRecognizer,
    debouncer: Debouncer,
    reset_on_hand_loss: bool,
}

impl RecognitionSession {
    pub fn new(config: &Config) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config.thresholds),
            debouncer: Debouncer::new(),
            reset_on_hand_loss: config.dispatch.reset_on_hand_loss,
        }
    }

    /// Runs one frame through recognition and debouncing; returns the command to dispatch, if any.
    pub fn process(&mut self, points: Option<&[Point2D]>) -> Option<Command> {
        match self.recognizer.recognise(points) {
            Ok(recognition) => {
                log::trace!(
                    "fingers {} -> {} (pose {}) at ({:.0}, {:.0})",
                    recognition.finger_states,
                    recognition.command,
                    recognition.static_command,
                    recognition.center.x,
                    recognition.center.y
                );
                self.debouncer.submit(recognition.command)
            }
            Err(err) => {
                log::debug!("{err}; motion history cleared");
                if self.reset_on_hand_loss {
                    self.debouncer.reset();
                }
                None
            }
        }
    }

    pub fn last_dispatched(&self) -> Command {
        self.debouncer.last_dispatched()
    }
}

pub type RecognizerHandle = WorkerHandle;

/// Spawns the recognition worker. Frames are handled one at a time in the
/// order they arrive; none are skipped, since the swipe test counts frames.
pub fn start_recognizer<D, S>(
    detector: D,
    frame_rx: Receiver<D::Frame>,
    sink: S,
    config: &Config,
) -> RecognizerHandle
where
    D: LandmarkDetector,
    S: CommandSink,
{
    let session = RecognitionSession::new(config);

    log::info!(
        "starting gesture recognizer (swipe lag {} frames)",
        config.thresholds.motion_lag_frames
    );

    WorkerHandle::spawn(move |stop| run_worker_loop(detector, frame_rx, sink, session, stop))
}

fn run_worker_loop<D: LandmarkDetector, S: CommandSink>(
    mut detector: D,
    frame_rx: Receiver<D::Frame>,
    mut sink: S,
    mut session: RecognitionSession,
    stop: &AtomicBool,
) {
    while !stop.load(Ordering::Relaxed) {
        let frame = match frame_rx.recv_timeout(STOP_POLL_INTERVAL) {
            Ok(frame) => frame,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("frame source closed; recognizer stopping");
                break;
            }
        };

        let landmarks = match detector.detect(&frame) {
            Ok(landmarks) => landmarks,
            Err(err) => {
                log::warn!("landmark detection failed: {err:?}");
                None
            }
        };

        let Some(command) = session.process(landmarks.as_deref()) else {
            continue;
        };

        if let Err(err) = sink.deliver(command) {
            log::warn!("failed to deliver {command}: {err:#}");
            break;
        }

        if command == Command::Exit {
            log::info!("exit gesture dispatched; recognizer stopping");
            break;
        }
    }
}
