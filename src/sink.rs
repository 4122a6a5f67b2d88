//! Destinations for finished geometry.
//!
//! The renderer hands segments over one at a time, in drawing order, plus one
//! closed polyline for the outer frame at the end. Sinks own the underlying
//! file or buffer; the renderer never sees it, so the same drawing can go to
//! a plotter file, a test collector, or (with the `svg` feature) an SVG
//! preview.

use std::io::{self, Write};

use kurbo::{Line, Point};

/// A destination for plotted geometry.
pub trait PlotSink {
    /// Record one line segment.
    fn segment(&mut self, segment: Line) -> io::Result<()>;

    /// Record a closed polyline, one point per vertex.
    fn polyline(&mut self, points: &[Point]) -> io::Result<()>;
}

/// A sink that writes plain text: one `x0,y0 x1,y1` line per segment, and a
/// polyline as all of its points space-separated on a single line.
///
/// Coordinates use `f64`'s `Display` formatting, which is the shortest string
/// that round-trips.
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        TextSink { out }
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> PlotSink for TextSink<W> {
    fn segment(&mut self, segment: Line) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{} {},{}",
            segment.p0.x, segment.p0.y, segment.p1.x, segment.p1.y
        )
    }

    fn polyline(&mut self, points: &[Point]) -> io::Result<()> {
        for p in points {
            write!(self.out, "{},{} ", p.x, p.y)?;
        }
        writeln!(self.out)
    }
}

/// A sink that collects everything into an [`svg::Document`], for previewing
/// a drawing before committing pen to paper.
#[cfg(feature = "svg")]
pub struct SvgSink {
    segments: Vec<Line>,
    polylines: Vec<Vec<Point>>,
}

#[cfg(feature = "svg")]
impl SvgSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        SvgSink {
            segments: Vec::new(),
            polylines: Vec::new(),
        }
    }

    /// Build an SVG document of everything collected so far, with the view
    /// box fitted to the geometry.
    pub fn document(&self) -> svg::Document {
        use svg::node::element::path::Data;

        let mut bbox: Option<kurbo::Rect> = None;
        let mut grow = |p: Point| {
            let r = kurbo::Rect::from_points(p, p);
            bbox = Some(bbox.map_or(r, |b| b.union(r)));
        };
        for seg in &self.segments {
            grow(seg.p0);
            grow(seg.p1);
        }
        for poly in &self.polylines {
            for &p in poly {
                grow(p);
            }
        }
        let bbox = bbox
            .unwrap_or(kurbo::Rect::new(0.0, 0.0, 1.0, 1.0))
            .inflate(0.05, 0.05);

        let mut data = Data::new();
        for seg in &self.segments {
            data = data
                .move_to((seg.p0.x, seg.p0.y))
                .line_to((seg.p1.x, seg.p1.y));
        }
        for poly in &self.polylines {
            if let Some((first, rest)) = poly.split_first() {
                data = data.move_to((first.x, first.y));
                for p in rest {
                    data = data.line_to((p.x, p.y));
                }
            }
        }

        let path = svg::node::element::Path::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", bbox.width().max(bbox.height()) * 1e-3)
            .set("d", data);

        svg::Document::new()
            .set(
                "viewBox",
                (bbox.min_x(), bbox.min_y(), bbox.width(), bbox.height()),
            )
            .add(path)
    }
}

#[cfg(feature = "svg")]
impl Default for SvgSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "svg")]
impl PlotSink for SvgSink {
    fn segment(&mut self, segment: Line) -> io::Result<()> {
        self.segments.push(segment);
        Ok(())
    }

    fn polyline(&mut self, points: &[Point]) -> io::Result<()> {
        self.polylines.push(points.to_vec());
        Ok(())
    }
}
