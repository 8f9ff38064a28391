use crate::colors::Color;
use serde::Serialize;

/// A point in the unit square: `(0, 0)` is the top-leading corner and
/// `(1, 1)` the bottom-trailing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Start and end points of a linear gradient running at `angle_degrees`.
///
/// The two points are reflections of each other through the centre, so
/// `start + end == (1, 1)` for every angle.  0° runs left to right, 90° top
/// to bottom.
pub fn gradient_points(angle_degrees: f64) -> (UnitPoint, UnitPoint) {
    let radians = angle_degrees.to_radians();
    let (dx, dy) = (radians.cos() * 0.5, radians.sin() * 0.5);

    (
        UnitPoint::new(0.5 - dx, 0.5 - dy),
        UnitPoint::new(0.5 + dx, 0.5 + dy),
    )
}

/// Linear gradient with evenly spaced color stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub stops: Vec<Color>,
    pub start: UnitPoint,
    pub end:   UnitPoint,
}

impl LinearGradient {
    /// Parse each hex stop and orient the gradient along `angle_degrees`.
    pub fn from_hex_stops<S: AsRef<str>>(stops: &[S], angle_degrees: f64) -> Self {
        let (start, end) = gradient_points(angle_degrees);
        Self {
            stops: stops.iter().map(|s| Color::from_hex(s.as_ref())).collect(),
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn zero_degrees_runs_left_to_right() {
        let (start, end) = gradient_points(0.0);
        assert!(close(start.x, 0.0) && close(start.y, 0.5));
        assert!(close(end.x, 1.0) && close(end.y, 0.5));
    }

    #[test]
    fn ninety_degrees_runs_top_to_bottom() {
        let (start, end) = gradient_points(90.0);
        assert!(close(start.x, 0.5) && close(start.y, 0.0));
        assert!(close(end.x, 0.5) && close(end.y, 1.0));
    }

    #[test]
    fn start_and_end_reflect_through_centre() {
        for step in 0..720 {
            let angle = step as f64 * 0.5 - 7.25;
            let (start, end) = gradient_points(angle);
            assert!(close(start.x + end.x, 1.0), "x at {angle}");
            assert!(close(start.y + end.y, 1.0), "y at {angle}");
        }
    }

    #[test]
    fn stops_keep_their_order() {
        let g = LinearGradient::from_hex_stops(&["#FF0000", "#0000FF"][..], 135.0);
        assert_eq!(g.stops, vec![Color::from_hex("#FF0000"), Color::from_hex("#0000FF")]);
        assert!(g.start.x > g.end.x);
        assert!(g.start.y < g.end.y);
    }
}
