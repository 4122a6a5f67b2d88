//! Splitting a segment at circle boundaries and keeping the pieces where a
//! predicate holds.

use kurbo::{Line, ParamCurve, Point};

use crate::geom::Circle;
use crate::num::CheapOrderedFloat;

/// Partition `line` at every crossing with a circle in `circles` and keep the
/// pieces whose midpoint satisfies `pred`.
///
/// The crossings cut `line`'s `[0, 1]` span into intervals on which any
/// predicate that depends only on containment in `circles` (or distance to
/// circles derived from them) is constant, so a single sample classifies the
/// whole interval. Sampling at the *midpoint* is the load-bearing tie-break:
/// midpoints never land exactly on a circle boundary, where strict
/// containment would be ambiguous.
///
/// The returned segments are disjoint, ordered along `line`'s direction, and
/// clipped to its extent. With no circles there are no crossings and hence no
/// intervals, so the result is empty no matter what `pred` says — a segment
/// nowhere near the pattern contributes nothing.
pub fn split<F: Fn(Point) -> bool>(circles: &[Circle], line: Line, pred: F) -> Vec<Line> {
    let mut ts = Vec::new();
    for c in circles {
        if let Some((t0, t1)) = c.intersect_line(line) {
            ts.push(t0);
            ts.push(t1);
        }
    }
    // The quadratic formula hands roots back in descending order, so this
    // sort is load-bearing, not a tidy-up.
    ts.sort_unstable_by_key(|&t| CheapOrderedFloat::from(t));

    let mut pieces = Vec::new();
    for pair in ts.windows(2) {
        let (mut t0, mut t1) = (pair[0], pair[1]);
        if t1 < 0.0 || t0 > 1.0 {
            continue;
        }
        t0 = t0.max(0.0);
        t1 = t1.min(1.0);
        if pred(line.eval((t0 + t1) / 2.0)) {
            pieces.push(Line::new(line.eval(t0), line.eval(t1)));
        }
    }
    pieces
}
