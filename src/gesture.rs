use crate::{
    config::Thresholds,
    error::RecognitionError,
    geometry::{angle_at_vertex, magnitude, vector_between},
    motion::{MotionTracker, classify_swipe},
    types::{Command, FingerStates, HandLandmark, LandmarkSet, Point2D},
};

/// (middle joint, tip) for index, middle, ring and pinky.
const FINGER_JOINTS: [(HandLandmark, HandLandmark); 4] = [
    (HandLandmark::IndexPip, HandLandmark::IndexTip),
    (HandLandmark::MiddlePip, HandLandmark::MiddleTip),
    (HandLandmark::RingPip, HandLandmark::RingTip),
    (HandLandmark::PinkyPip, HandLandmark::PinkyTip),
];

/// Result of one recognized frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recognition {
    /// Palm center of this frame; the value the motion history must record.
    pub center: Point2D,
    pub finger_states: FingerStates,
    /// What the pose alone says, before any swipe override.
    pub static_command: Command,
    pub command: Command,
}

/// Per-frame orchestrator: static pose first, then a swipe that may override it.
pub struct GestureRecognizer {
    thresholds: Thresholds,
    motion: MotionTracker,
}

impl GestureRecognizer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            motion: MotionTracker::new(thresholds.motion_lag_frames),
            thresholds,
        }
    }

    /// Recognizes one frame and advances the motion history.
    ///
    /// A missing or malformed hand clears the history instead of extending it,
    /// so the first frame after tracking resumes cannot register as a swipe.
    pub fn recognise(
        &mut self,
        points: Option<&[Point2D]>,
    ) -> Result<Recognition, RecognitionError> {
        let landmarks = match points
            .ok_or(RecognitionError::NoHandDetected)
            .and_then(LandmarkSet::from_points)
        {
            Ok(landmarks) => landmarks,
            Err(err) => {
                self.motion.reset();
                return Err(err);
            }
        };

        let delayed = self.motion.advance(landmarks.palm_center());
        Ok(self.resolve(&landmarks, delayed))
    }

    /// Stateless core: classify `landmarks`, comparing against a center seen
    /// earlier when one is available.
    pub fn resolve(&self, landmarks: &LandmarkSet, delayed_center: Option<Point2D>) -> Recognition {
        let finger_states = finger_states(landmarks);
        let static_command = classify_static(finger_states, landmarks, &self.thresholds);
        let center = landmarks.palm_center();

        let command = delayed_center
            .and_then(|delayed| classify_swipe(delayed, center, &self.thresholds))
            .unwrap_or(static_command);

        Recognition {
            center,
            finger_states,
            static_command,
            command,
        }
    }
}

pub fn finger_states(landmarks: &LandmarkSet) -> FingerStates {
    let [index, middle, ring, pinky] =
        FINGER_JOINTS.map(|(joint, tip)| classify_finger(landmarks, joint, tip));
    FingerStates::new(classify_thumb(landmarks), index, middle, ring, pinky)
}

/// Up when the tip sits farther from the wrist than the middle joint.
fn classify_finger(landmarks: &LandmarkSet, joint: HandLandmark, tip: HandLandmark) -> bool {
    let wrist = landmarks.get(HandLandmark::Wrist);
    magnitude(landmarks.get(tip), wrist) > magnitude(landmarks.get(joint), wrist)
}

/// The thumb folds sideways across the palm rather than curling towards the
/// wrist, so it is judged along the knuckle line (pinky knuckle to index
/// knuckle): up when the tip lies beyond its base joint in that direction.
/// Works for either hand and with or without mirroring.
fn classify_thumb(landmarks: &LandmarkSet) -> bool {
    let knuckle_axis = vector_between(
        landmarks.get(HandLandmark::PinkyMcp),
        landmarks.get(HandLandmark::IndexMcp),
    );
    let thumb = vector_between(
        landmarks.get(HandLandmark::ThumbMcp),
        landmarks.get(HandLandmark::ThumbTip),
    );
    thumb.dot(knuckle_axis) > 0.0
}

struct PoseRule {
    fingers: FingerStates,
    guard: Option<fn(&LandmarkSet, &Thresholds) -> bool>,
    command: Command,
}

// First match wins.
const POSE_RULES: [PoseRule; 5] = [
    PoseRule {
        fingers: FingerStates::new(false, true, true, false, false),
        guard: None,
        command: Command::Toggle,
    },
    PoseRule {
        fingers: FingerStates::new(true, false, false, false, false),
        guard: None,
        command: Command::VolumeUp,
    },
    PoseRule {
        fingers: FingerStates::new(false, false, false, false, false),
        guard: None,
        command: Command::VolumeDown,
    },
    PoseRule {
        fingers: FingerStates::new(false, true, false, false, true),
        guard: None,
        command: Command::Exit,
    },
    PoseRule {
        fingers: FingerStates::new(true, true, false, false, false),
        guard: Some(is_finger_heart),
        command: Command::ToggleFavorite,
    },
];

/// Maps a finger pattern to a pose command. Pure; unmatched poses give `Command::None`.
pub fn classify_static(
    fingers: FingerStates,
    landmarks: &LandmarkSet,
    thresholds: &Thresholds,
) -> Command {
    POSE_RULES
        .iter()
        .find(|rule| {
            rule.fingers == fingers && rule.guard.is_none_or(|guard| guard(landmarks, thresholds))
        })
        .map_or(Command::None, |rule| rule.command)
}

/// Thumb and index crossed: thumb IP joint close to the index PIP joint, and
/// thumb tip and index tip meeting at an acute angle there.
fn is_finger_heart(landmarks: &LandmarkSet, thresholds: &Thresholds) -> bool {
    let index_pip = landmarks.get(HandLandmark::IndexPip);
    let pinch = magnitude(landmarks.get(HandLandmark::ThumbIp), index_pip);
    let angle = angle_at_vertex(
        landmarks.get(HandLandmark::ThumbTip),
        index_pip,
        landmarks.get(HandLandmark::IndexTip),
    );
    pinch < thresholds.pinch_distance_px && angle < thresholds.pinch_angle_deg
}
