use serde::{Deserialize, Serialize};

/// Rounds every coordinate of a geometric value to the nearest integer.
pub trait Round {
    fn round(self) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self { Point { x, y } }
}

impl Round for Point {
    fn round(self) -> Self { Point::new(self.x.round(), self.y.round()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self { Size { width, height } }

    pub fn zero() -> Self { Size::default() }

    pub fn area(&self) -> f64 { self.width * self.height }
}

impl Round for Size {
    fn round(self) -> Self { Size::new(self.width.round(), self.height.round()) }
}

/// Axis-aligned rectangle. `max_x`/`max_y` are derived from origin and size,
/// never stored, so the `x2 = x1 + width` invariant cannot drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn zero() -> Self { Rect::default() }

    #[inline]
    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }

    #[inline]
    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    pub fn is_degenerate(&self) -> bool { self.size.width <= 0.0 || self.size.height <= 0.0 }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Replaces non-finite coordinates with zero and coerces negative sizes to
    /// zero. Degenerate inputs become degenerate but well-formed rectangles.
    pub fn sanitized(self) -> Self {
        fn finite(v: f64) -> f64 {
            if v.is_finite() { v } else { 0.0 }
        }
        Rect {
            origin: Point::new(finite(self.origin.x), finite(self.origin.y)),
            size: Size::new(
                finite(self.size.width).max(0.0),
                finite(self.size.height).max(0.0),
            ),
        }
    }

    /// Component-wise linear interpolation towards `other`. Not an
    /// intersection: the aspect ratio of the result is unconstrained while
    /// `progress` is strictly between 0 and 1.
    pub fn interpolate(self, other: Rect, progress: f64) -> Rect {
        Rect {
            origin: Point::new(
                lerp(self.origin.x, other.origin.x, progress),
                lerp(self.origin.y, other.origin.y, progress),
            ),
            size: Size::new(
                lerp(self.size.width, other.size.width, progress),
                lerp(self.size.height, other.size.height, progress),
            ),
        }
    }
}

impl Round for Rect {
    fn round(self) -> Self {
        Rect {
            origin: self.origin.round(),
            size: self.size.round(),
        }
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 { a + (b - a) * t }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn interpolate_endpoints_are_exact() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(20.0, 40.0, 300.0, 150.0);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
    }

    #[test]
    fn interpolate_equal_endpoints_is_identity() {
        let a = Rect::new(3.5, 7.25, 101.5, 53.75);
        for i in 0..=10 {
            let p = i as f64 / 10.0;
            assert_eq!(a.interpolate(a, p), a);
        }
    }

    #[test]
    fn interpolate_is_monotonic_per_coordinate() {
        let a = Rect::new(0.0, 100.0, 400.0, 50.0);
        let b = Rect::new(80.0, 20.0, 100.0, 300.0);
        let mut prev = a;
        for i in 1..=20 {
            let cur = a.interpolate(b, i as f64 / 20.0);
            assert!(cur.origin.x >= prev.origin.x);
            assert!(cur.origin.y <= prev.origin.y);
            assert!(cur.size.width <= prev.size.width);
            assert!(cur.size.height >= prev.size.height);
            prev = cur;
        }
    }

    #[test]
    fn interpolate_midpoint_is_componentwise_mean() {
        let a = Rect::new(0.0, 0.0, 100.0, 200.0);
        let b = Rect::new(50.0, 30.0, 300.0, 100.0);
        assert_eq!(a.interpolate(b, 0.5), Rect::new(25.0, 15.0, 200.0, 150.0));
    }

    #[test]
    fn sanitized_scrubs_non_finite_and_negative() {
        let r = Rect::new(f64::NAN, f64::INFINITY, -5.0, f64::NEG_INFINITY);
        assert_eq!(r.sanitized(), Rect::zero());

        let ok = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(ok.sanitized(), ok);
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.1, 30.0)));
    }
}
