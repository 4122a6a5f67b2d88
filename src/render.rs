//! The scan driver: sweeps fill lines across the disk and clips everything to
//! the outer boundary.

use kurbo::{Line, Point};

use crate::field::CircleField;
use crate::geom::Circle;
use crate::sink::PlotSink;
use crate::split::split;
use crate::Error;

/// One drawing's worth of parameters.
///
/// [`Pattern::new`] covers the common case; the fields are public for anyone
/// who wants to decouple the tiling reach from the frame, or change the
/// resolution.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// Radius of the tiled circles.
    pub circle_radius: f64,
    /// Reach of the tiling: a circle is included when its center lies within
    /// `circle_radius + visible_radius` of the origin.
    pub visible_radius: f64,
    /// Radius of the outer boundary disk, which also bounds the scanned
    /// square.
    pub outer_radius: f64,
    /// Number of horizontal scan-lines swept across the bounding square.
    /// Must be at least 2.
    pub scan_lines: usize,
    /// Number of points used to discretize each circle outline.
    /// Must be at least 2.
    pub circle_steps: usize,
}

impl Pattern {
    /// A pattern of circles of radius `circle_radius`, framed by an outer
    /// boundary of radius `outer_radius`, at the standard resolution (201
    /// scan-lines, 360 points per circle).
    ///
    /// The tiling reach is `outer_radius · √2`: scan-lines span the bounding
    /// *square* of the frame, so the tiling has to cover its corners.
    pub fn new(circle_radius: f64, outer_radius: f64) -> Self {
        Pattern {
            circle_radius,
            visible_radius: outer_radius * std::f64::consts::SQRT_2,
            outer_radius,
            scan_lines: 201,
            circle_steps: 360,
        }
    }

    /// Render the drawing into `sink`.
    ///
    /// Emission order is deterministic: scan-lines bottom to top (each one's
    /// pieces left to right), then each field circle's visible arcs, then the
    /// frame as one closed polyline.
    ///
    /// The only failure is the sink refusing a write; geometric degeneracies
    /// along the way simply contribute nothing.
    ///
    /// # Panics
    ///
    /// Panics if `scan_lines` or `circle_steps` is less than 2.
    pub fn render<S: PlotSink>(&self, sink: &mut S) -> Result<(), Error> {
        assert!(self.scan_lines >= 2, "a scan needs at least two lines");

        let field = CircleField::tile(self.circle_radius, self.visible_radius);
        let outer = [Circle::new((0.0, 0.0), self.outer_radius)];
        let s = self.outer_radius;

        let filled = |p: Point| field.odd_coverage(p);
        let visible = |p: Point| p.to_vec2().hypot() <= s;

        // Parity-filled scan-lines, clipped to the outer disk. The second
        // split runs against a different circle set and predicate than the
        // first; the splitter doesn't care.
        for i in 0..self.scan_lines {
            let t = i as f64 / (self.scan_lines - 1) as f64;
            let y = -s + 2.0 * s * t;
            let line = Line::new((-s, y), (s, y));
            for piece in split(field.circles(), line, filled) {
                for clipped in split(&outer, piece, visible) {
                    sink.segment(clipped)?;
                }
            }
        }

        // The visible arcs of each field circle.
        for c in field.circles() {
            let points: Vec<Point> = c.discretize(self.circle_steps).collect();
            for edge in points.windows(2) {
                for clipped in split(&outer, Line::new(edge[0], edge[1]), visible) {
                    sink.segment(clipped)?;
                }
            }
        }

        // The frame itself, unclipped.
        let frame: Vec<Point> = outer[0].discretize(self.circle_steps).collect();
        sink.polyline(&frame)?;

        Ok(())
    }
}
