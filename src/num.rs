//! A thin wrapper so we can sort floats.

/// A wrapper for `f64` that implements `Ord`.
///
/// Unlike the more principled wrappers in the `ordered_float` crate, this one
/// neither orders NaNs nor guards against them on construction; it just
/// compares them as equal to everything. The only sort in this crate runs
/// over intersection parameters, and the discriminant guard in
/// [`Circle::intersect_line`](crate::Circle::intersect_line) keeps those
/// NaN-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CheapOrderedFloat(f64);

impl From<f64> for CheapOrderedFloat {
    fn from(value: f64) -> Self {
        CheapOrderedFloat(value)
    }
}

impl Eq for CheapOrderedFloat {}

impl PartialOrd for CheapOrderedFloat {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CheapOrderedFloat {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.0 < other.0 {
            std::cmp::Ordering::Less
        } else if self.0 > other.0 {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    }
}
