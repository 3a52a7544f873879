//! Splitting an interval at the sign changes of the integrand.

use std::cmp::Ordering;

/// A sub-interval `[start, end]` of the integration range.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<T> {
    /// Left end.
    pub start: T,
    /// Right end; equal to the next segment's `start`.
    pub end: T,
}

impl<T> Segment<T> {
    /// Creates `[start, end]`.
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Applies `f` to both bounds.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Segment<U> {
        Segment {
            start: f(&self.start),
            end: f(&self.end),
        }
    }
}

/// Cuts `[lower, upper]` at every root lying strictly inside it.
///
/// Roots equal to an endpoint are dropped, since the endpoint already bounds
/// a segment, and repeated roots produce a single cut. The returned segments
/// are ascending, contiguous, and cover exactly `[lower, upper]`. A
/// degenerate interval (`lower == upper`) yields one empty segment.
///
/// `lower <= upper` is expected; callers reorder reversed bounds first.
pub fn partition<T>(lower: T, upper: T, roots: Vec<T>) -> Vec<Segment<T>>
where
    T: PartialOrd + Clone,
{
    let mut cuts: Vec<T> = roots
        .into_iter()
        .filter(|r| lower < *r && *r < upper)
        .collect();
    cuts.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    cuts.dedup_by(|x, y| x == y);

    let mut points = Vec::with_capacity(cuts.len() + 2);
    points.push(lower);
    points.extend(cuts);
    points.push(upper);

    points
        .windows(2)
        .map(|pair| Segment::new(pair[0].clone(), pair[1].clone()))
        .collect()
}
