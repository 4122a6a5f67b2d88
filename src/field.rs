//! Tiling a disk with lattice-centered circles.

use kurbo::Point;

use crate::geom::Circle;

/// The working set of equal-radius circles whose overlaps make the pattern.
///
/// Membership is deterministic: one circle per integer lattice point whose
/// center lies within `circle_radius + visible_radius` of the origin. That
/// reach guarantees every circle that could touch the visible disk is in the
/// set, so the parity count never misses a contribution near the edge.
///
/// The field is built once per drawing and read-only afterwards.
#[derive(Clone, Debug)]
pub struct CircleField {
    circles: Vec<Circle>,
}

impl CircleField {
    /// Tile circles of radius `circle_radius` over a disk of radius
    /// `visible_radius` centered at the origin.
    pub fn tile(circle_radius: f64, visible_radius: f64) -> Self {
        let reach = circle_radius + visible_radius;
        let a = reach.ceil() as i64;
        let mut circles = Vec::new();
        for y in -a..=a {
            for x in -a..=a {
                let center = Point::new(x as f64, y as f64);
                if center.to_vec2().hypot() <= reach {
                    circles.push(Circle::new(center, circle_radius));
                }
            }
        }
        CircleField { circles }
    }

    /// The circles, in tiling order (row-major, lowest `y` first).
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// The number of circles in the field.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// How many circles strictly contain `p`.
    pub fn coverage(&self, p: Point) -> usize {
        self.circles.iter().filter(|c| c.contains(p)).count()
    }

    /// The parity fill rule: `p` is "filled" when it lies inside an odd
    /// number of circles.
    pub fn odd_coverage(&self, p: Point) -> bool {
        self.coverage(p) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_counts_lattice_points() {
        // Reach 3: every integer (x, y) with x^2 + y^2 <= 9. Counting by row:
        // 7 + 5 + 5 + 1 for y = 0, ±1, ±2, ±3 gives 29.
        let field = CircleField::tile(1.0, 2.0);
        assert_eq!(field.len(), 29);

        let brute = (-3..=3)
            .flat_map(|y| (-3..=3).map(move |x| (x, y)))
            .filter(|&(x, y): &(i32, i32)| ((x * x + y * y) as f64).sqrt() <= 3.0)
            .count();
        assert_eq!(field.len(), brute);
    }

    #[test]
    fn tile_is_deterministic() {
        let a = CircleField::tile(0.75, 2.0);
        let b = CircleField::tile(0.75, 2.0);
        assert_eq!(a.circles(), b.circles());
    }

    #[test]
    fn coverage_at_the_origin() {
        // With radius 1, only the circle centered at the origin strictly
        // contains it; the four unit-distance neighbors have it exactly on
        // their boundary.
        let field = CircleField::tile(1.0, 2.0);
        assert_eq!(field.coverage(Point::new(0.0, 0.0)), 1);
        assert!(field.odd_coverage(Point::new(0.0, 0.0)));
    }

    #[test]
    fn coverage_between_lattice_points() {
        // (0.5, 0) is strictly inside the circles at (0, 0) and (1, 0).
        let field = CircleField::tile(1.0, 2.0);
        assert_eq!(field.coverage(Point::new(0.5, 0.0)), 2);
        assert!(!field.odd_coverage(Point::new(0.5, 0.0)));
    }
}
