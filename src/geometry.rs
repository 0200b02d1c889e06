use crate::types::Point2D;

const MIN_LENGTH: f32 = 1e-5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const UNIT_X: Vector2D = Vector2D { x: 1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Vector pointing from `a` to `b`.
pub fn vector_between(a: Point2D, b: Point2D) -> Vector2D {
    Vector2D::new(b.x - a.x, b.y - a.y)
}

pub fn magnitude(a: Point2D, b: Point2D) -> f32 {
    vector_between(a, b).length()
}

/// Unsigned angle in degrees (0..=180). Zero-length input yields 0.
pub fn angle_between(v1: Vector2D, v2: Vector2D) -> f32 {
    let len1 = v1.length();
    let len2 = v2.length();
    if len1 < MIN_LENGTH || len2 < MIN_LENGTH {
        return 0.0;
    }

    (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle at `vertex` between the segments towards `prev` and `next`.
pub fn angle_at_vertex(prev: Point2D, vertex: Point2D, next: Point2D) -> f32 {
    angle_between(vector_between(vertex, prev), vector_between(vertex, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn test_vector_between_points_from_a_to_b() {
        let v = vector_between(Point2D::new(10.0, 5.0), Point2D::new(4.0, 9.0));
        assert_eq!(v, Vector2D::new(-6.0, 4.0));
    }

    #[test]
    fn test_magnitude_is_euclidean() {
        let d = magnitude(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
        assert!(approx(d, 5.0), "d={}", d);
    }

    #[test]
    fn test_angle_between_is_unsigned() {
        let up = Vector2D::new(0.0, -1.0);
        let down = Vector2D::new(0.0, 1.0);
        assert!(approx(angle_between(up, Vector2D::UNIT_X), 90.0));
        assert!(approx(angle_between(down, Vector2D::UNIT_X), 90.0));
        assert!(approx(angle_between(Vector2D::new(-2.0, 0.0), Vector2D::UNIT_X), 180.0));
        assert!(approx(angle_between(Vector2D::new(5.0, 5.0), Vector2D::UNIT_X), 45.0));
    }

    #[test]
    fn test_degenerate_vector_angle_is_zero() {
        assert_eq!(angle_between(Vector2D::default(), Vector2D::UNIT_X), 0.0);
        let p = Point2D::new(1.0, 1.0);
        assert_eq!(angle_at_vertex(p, p, Point2D::new(4.0, 1.0)), 0.0);
    }

    #[test]
    fn test_angle_at_vertex() {
        let angle = angle_at_vertex(
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 10.0),
        );
        assert!(approx(angle, 90.0), "angle={}", angle);
    }
}
