#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod field;
mod geom;
mod num;
mod render;
pub mod sink;
mod split;

pub use field::CircleField;
pub use geom::Circle;
pub use render::Pattern;
pub use sink::{PlotSink, TextSink};
pub use split::split;

#[cfg(feature = "svg")]
pub use sink::SvgSink;

/// Things that can go wrong while rendering a drawing.
///
/// Geometric degeneracies — zero-length segments, tangent lines, empty
/// intersection sets — are not errors; they just contribute nothing to the
/// output. The one thing that can actually fail is the sink.
#[derive(Debug)]
pub enum Error {
    /// The sink refused an emission.
    Sink(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Sink(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Sink(err) => write!(f, "the output sink failed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Sink(err) => Some(err),
        }
    }
}
