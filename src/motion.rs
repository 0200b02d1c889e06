use std::collections::VecDeque;

use crate::{
    config::Thresholds,
    geometry::{Vector2D, angle_between, magnitude, vector_between},
    types::{Command, Point2D},
};

/// Fixed-lag buffer: every `shift` stores the newest value and returns the one
/// stored `capacity` shifts earlier, or `None` until that much history exists.
#[derive(Clone, Debug)]
pub struct DelayLine<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> DelayLine<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn shift(&mut self, value: T) -> Option<T> {
        self.buffer.push_back(value);
        if self.buffer.len() > self.capacity {
            self.buffer.pop_front()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Remembers recent palm centers so the swipe test can look several frames back.
#[derive(Clone, Debug)]
pub struct MotionTracker {
    history: DelayLine<Point2D>,
}

impl MotionTracker {
    pub fn new(lag_frames: usize) -> Self {
        Self {
            history: DelayLine::new(lag_frames),
        }
    }

    /// Records `center` and returns the center seen `lag_frames` frames ago.
    pub fn advance(&mut self, center: Point2D) -> Option<Point2D> {
        self.history.shift(center)
    }

    /// Drops all history; called when tracking is lost so stale centers cannot fake a swipe.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Horizontal swipe test between the delayed and current palm centers.
pub fn classify_swipe(
    delayed: Point2D,
    current: Point2D,
    thresholds: &Thresholds,
) -> Option<Command> {
    let center_vector = vector_between(delayed, current);
    let distance = magnitude(delayed, current);
    if distance <= thresholds.swipe_distance_px {
        return None;
    }

    let angle = angle_between(center_vector, Vector2D::UNIT_X);
    if center_vector.x > 0.0 && angle < thresholds.swipe_right_max_angle_deg {
        Some(Command::Next)
    } else if center_vector.x < 0.0 && angle > thresholds.swipe_left_min_angle_deg {
        Some(Command::Previous)
    } else {
        None
    }
}
