//! Synthetic hands for tests: an upright right hand, palm towards the camera,
//! positioned so that landmark 9 (palm center) lands exactly on `center`.
//! Offsets are in pixels, y grows downwards.

const WRIST: (f32, f32) = (0.0, 100.0);
const THUMB_CMC: (f32, f32) = (-30.0, 80.0);
const THUMB_MCP: (f32, f32) = (-50.0, 60.0);
/// (ip, tip)
const THUMB_OUT: [(f32, f32); 2] = [(-70.0, 45.0), (-90.0, 30.0)];
const THUMB_FOLDED: [(f32, f32); 2] = [(-30.0, 40.0), (-10.0, 30.0)];

/// Index, middle, ring, pinky knuckles.
const KNUCKLES: [(f32, f32); 4] = [(-30.0, 0.0), (0.0, 0.0), (25.0, 0.0), (50.0, 10.0)];
/// (pip, dip, tip) relative to the knuckle.
const FINGER_UP: [(f32, f32); 3] = [(0.0, -30.0), (0.0, -50.0), (0.0, -70.0)];
const FINGER_CURLED: [(f32, f32); 3] = [(0.0, -30.0), (0.0, -15.0), (0.0, 10.0)];

fn offset(center: (f32, f32), d: (f32, f32)) -> (f32, f32) {
    (center.0 + d.0, center.1 + d.1)
}

/// 21 landmarks with the given up/down pattern (thumb, index, middle, ring, pinky).
pub fn hand(center: (f32, f32), fingers: [bool; 5]) -> Vec<(f32, f32)> {
    let thumb = if fingers[0] { THUMB_OUT } else { THUMB_FOLDED };
    let mut points = vec![
        offset(center, WRIST),
        offset(center, THUMB_CMC),
        offset(center, THUMB_MCP),
        offset(center, thumb[0]),
        offset(center, thumb[1]),
    ];

    for (knuckle, up) in KNUCKLES.iter().zip(&fingers[1..]) {
        let joints = if *up { FINGER_UP } else { FINGER_CURLED };
        let base = offset(center, *knuckle);
        points.push(base);
        points.extend(joints.iter().map(|d| offset(base, *d)));
    }

    points
}

/// Finger heart: thumb IP resting on the index PIP, thumb tip crossing
/// past it at roughly 45 degrees to the index finger.
pub fn heart(center: (f32, f32)) -> Vec<(f32, f32)> {
    heart_with_thumb_tip(center, (-45.0, -45.0))
}

pub fn heart_with_thumb_tip(center: (f32, f32), thumb_tip: (f32, f32)) -> Vec<(f32, f32)> {
    let mut points = hand(center, [true, true, false, false, false]);
    points[2] = offset(center, (-45.0, 20.0));
    points[3] = offset(center, (-40.0, -25.0));
    points[4] = offset(center, thumb_tip);
    points
}
