use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;

/// Pixel-space position in the (already mirrored) capture frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point2D {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for [f32; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

/// Hand keypoint indices as emitted by the upstream landmark model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const COUNT: usize = 21;

    /// Reference point used as the hand center for motion tracking.
    pub const PALM_CENTER: HandLandmark = HandLandmark::MiddleMcp;
}

/// Exactly 21 landmarks for one detected hand.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [Point2D; HandLandmark::COUNT],
}

impl LandmarkSet {
    pub fn from_points(points: &[Point2D]) -> Result<Self, RecognitionError> {
        let points = <[Point2D; HandLandmark::COUNT]>::try_from(points).map_err(|_| {
            RecognitionError::InvalidLandmarkCount {
                found: points.len(),
            }
        })?;
        Ok(Self { points })
    }

    pub fn get(&self, landmark: HandLandmark) -> Point2D {
        self.points[landmark as usize]
    }

    pub fn palm_center(&self) -> Point2D {
        self.get(HandLandmark::PALM_CENTER)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Up/down flags ordered thumb, index, middle, ring, pinky.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerStates([bool; 5]);

impl FingerStates {
    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self([thumb, index, middle, ring, pinky])
    }

    pub const fn from_array(states: [bool; 5]) -> Self {
        Self(states)
    }

    pub fn is_up(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    pub fn up_count(&self) -> usize {
        self.0.iter().filter(|up| **up).count()
    }
}

impl fmt::Display for FingerStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for up in self.0 {
            f.write_str(if up { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    VolumeUp,
    VolumeDown,
    Toggle,
    Next,
    Previous,
    ToggleFavorite,
    Exit,
    /// No actionable gesture this frame.
    None,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Toggle,
        Command::Previous,
        Command::Next,
        Command::VolumeUp,
        Command::VolumeDown,
        Command::ToggleFavorite,
        Command::Exit,
        Command::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::VolumeUp => "volume-up",
            Command::VolumeDown => "volume-down",
            Command::Toggle => "toggle",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::ToggleFavorite => "toggle-favorite",
            Command::Exit => "exit",
            Command::None => "none",
        }
    }

    /// The hand gesture bound to this command.
    pub fn gesture_name(&self) -> &'static str {
        match self {
            Command::Toggle => "V sign",
            Command::Previous => "swipe left",
            Command::Next => "swipe right",
            Command::VolumeUp => "thumb out",
            Command::VolumeDown => "fist",
            Command::ToggleFavorite => "finger heart",
            Command::Exit => "rock",
            Command::None => "any other pose",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Toggle => "play / pause",
            Command::Previous => "previous track",
            Command::Next => "next track",
            Command::VolumeUp => "raise volume",
            Command::VolumeDown => "lower volume",
            Command::ToggleFavorite => "add / remove favorite",
            Command::Exit => "quit",
            Command::None => "separates consecutive gestures",
        }
    }

    /// Commands that keep firing every frame while the pose is held.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, Command::VolumeUp | Command::VolumeDown)
    }

    pub fn is_actionable(&self) -> bool {
        *self != Command::None
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
