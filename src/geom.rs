//! Geometric primitives: circles, and the line queries we run against them.
//!
//! Points and segments are just [`kurbo::Point`] and [`kurbo::Line`]; the one
//! type we add is [`Circle`], which knows how to answer the two questions the
//! rest of the crate asks of it: "is this point strictly inside you?" and
//! "where does this line cross you?".

use kurbo::{Line, Point, Vec2};

/// A circle, described by its center and (strictly positive) radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        debug_assert!(radius > 0.0);
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Whether `p` lies strictly inside this circle.
    ///
    /// Points exactly on the boundary count as *outside*. The parity fill
    /// rule ([`crate::CircleField::odd_coverage`]) depends on this: a point on
    /// a shared boundary is never double-counted.
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) < self.radius
    }

    /// Approximate the circle by `n` points, evenly spaced by angle and
    /// starting at angle zero.
    ///
    /// The sequence is closed: the final point comes back around to angle
    /// `2π`, so walking consecutive pairs traces every edge of the polyline
    /// with no wraparound case. (Closure is only up to floating-point
    /// accuracy; `sin(2π)` is about `-2.4e-16` in `f64`.)
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`; a one-point "polyline" has no edges and the angle
    /// step would divide by zero.
    pub fn discretize(&self, n: usize) -> impl Iterator<Item = Point> + Clone {
        assert!(n >= 2, "can't discretize a circle with fewer than 2 points");
        let c = *self;
        (0..n).map(move |i| {
            let t = i as f64 / (n - 1) as f64;
            c.center + c.radius * Vec2::from_angle(std::f64::consts::TAU * t)
        })
    }

    /// The parameters at which the infinite line through `line` crosses this
    /// circle, in the parameterization where `line.p0` is 0 and `line.p1` is 1.
    ///
    /// Returns `None` for a zero-length segment and for a line that misses
    /// the circle. A tangent line (zero discriminant) also counts as a miss:
    /// a double root would only inject a zero-width interval into
    /// [`crate::split`], and the original artwork was tuned with tangents
    /// ignored.
    ///
    /// The roots may lie outside `[0, 1]` (the *line* is infinite even though
    /// its parameterization comes from a segment), and they come back in
    /// *descending* order: `t0 > t1` always.
    pub fn intersect_line(&self, line: Line) -> Option<(f64, f64)> {
        let d = line.p1 - line.p0;
        let e = line.p0 - self.center;
        let a = d.dot(d);
        let b = 2.0 * d.dot(e);
        let c = e.dot(e) - self.radius * self.radius;
        let det = b * b - 4.0 * a * c;
        if a <= 0.0 || det <= 0.0 {
            return None;
        }
        let t0 = (-b + det.sqrt()) / (2.0 * a);
        let t1 = (-b - det.sqrt()) / (2.0 * a);
        Some((t0, t1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::ParamCurve;

    #[test]
    fn boundary_points_are_outside() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert!(c.contains(Point::new(0.0, 0.0)));
        assert!(c.contains(Point::new(0.999, 0.0)));
        // Exactly at distance r: outside.
        assert!(!c.contains(Point::new(1.0, 0.0)));
        assert!(!c.contains(Point::new(0.0, -1.0)));
        assert!(!c.contains(Point::new(1.001, 0.0)));
    }

    #[test]
    fn intersect_horizontal_diameter() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let line = Line::new((-2.0, 0.0), (2.0, 0.0));
        let (t0, t1) = c.intersect_line(line).unwrap();
        assert!(t0 > t1);
        let p0 = line.eval(t0);
        let p1 = line.eval(t1);
        assert!((p0.x - 1.0).abs() < 1e-12 && p0.y.abs() < 1e-12);
        assert!((p1.x + 1.0).abs() < 1e-12 && p1.y.abs() < 1e-12);
    }

    #[test]
    fn intersect_roots_can_leave_the_segment() {
        // The segment stops short of the circle, but the extended line
        // crosses it; both roots land beyond t = 1.
        let c = Circle::new((10.0, 0.0), 1.0);
        let line = Line::new((0.0, 0.0), (1.0, 0.0));
        let (t0, t1) = c.intersect_line(line).unwrap();
        assert!((t0 - 11.0).abs() < 1e-9);
        assert!((t1 - 9.0).abs() < 1e-9);
    }

    #[test]
    fn intersect_miss() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert_eq!(c.intersect_line(Line::new((5.0, 5.0), (6.0, 6.0))), None);
    }

    #[test]
    fn intersect_degenerate_segment() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert_eq!(c.intersect_line(Line::new((0.5, 0.0), (0.5, 0.0))), None);
    }

    #[test]
    fn intersect_tangent_is_a_miss() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert_eq!(c.intersect_line(Line::new((-2.0, 1.0), (2.0, 1.0))), None);
    }

    #[test]
    fn discretize_is_closed() {
        for &(r, n) in &[(1.0, 2), (1.0, 360), (3.5, 7)] {
            let c = Circle::new((2.0, -1.0), r);
            let pts: Vec<Point> = c.discretize(n).collect();
            assert_eq!(pts.len(), n);
            assert!(pts[0].distance(pts[n - 1]) < 1e-12);
            assert!((pts[0].x - (2.0 + r)).abs() < 1e-12);
        }
    }

    #[test]
    fn discretize_restarts() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let iter = c.discretize(10);
        let a: Vec<Point> = iter.clone().collect();
        let b: Vec<Point> = iter.collect();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn discretize_rejects_single_point() {
        let _ = Circle::new((0.0, 0.0), 1.0).discretize(1);
    }
}
