/// Stepping a 3D segment into a chain of cells
use std::ops::RangeInclusive;

/// Result of drawing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Number of boxes placed
    Drawn(usize),
    /// Start and end coincide, or the span is not finite; nothing was placed
    Degenerate,
}

impl LineOutcome {
    pub fn is_degenerate(self) -> bool {
        matches!(self, LineOutcome::Degenerate)
    }
}

/// Index of the driving axis; ties go to x, then y, then z
pub fn driving_axis(delta: [f64; 3]) -> usize {
    let abs = delta.map(f64::abs);
    let max = abs[0].max(abs[1]).max(abs[2]);
    abs.iter().position(|d| *d == max).unwrap_or(0)
}

/// Walk from `start` to `end` one unit at a time along the driving axis.
///
/// The other two axes are interpolated linearly with no error term, so
/// diagonals come out stair-stepped. Both ends are expected to be quantized
/// already. Returns `None` for a zero-length or non-finite segment.
///
/// The walk stops at the last whole step: on the grid that is `end`, but a
/// fractional span (float precision) falls short of it.
pub fn rasterize(start: [f64; 3], end: [f64; 3]) -> Option<LineWalk> {
    let delta = [end[0] - start[0], end[1] - start[1], end[2] - start[2]];
    if delta == [0.0; 3] || delta.iter().any(|d| !d.is_finite()) {
        return None;
    }

    let axis = driving_axis(delta);
    let length = delta[axis];
    Some(LineWalk {
        start,
        delta,
        axis,
        length,
        steps: 0..=length.abs().floor() as usize,
    })
}

/// Cells of a segment, produced lazily
#[derive(Debug, Clone)]
pub struct LineWalk {
    start: [f64; 3],
    delta: [f64; 3],
    axis: usize,
    length: f64,
    steps: RangeInclusive<usize>,
}

impl Iterator for LineWalk {
    type Item = [f64; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.steps.next()?;
        let travelled = self.length.signum() * i as f64;
        let mut point = [0.0; 3];
        for (k, p) in point.iter_mut().enumerate() {
            *p = if k == self.axis {
                self.start[k] + travelled
            } else {
                self.start[k] + travelled * self.delta[k] / self.length
            };
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: [f64; 3], end: [f64; 3]) -> Vec<[f64; 3]> {
        rasterize(start, end).unwrap().collect()
    }

    #[test]
    fn test_zero_length_is_degenerate() {
        assert!(rasterize([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_includes_both_endpoints() {
        let cases = [
            ([0.0, 0.0, 0.0], [5.0, 2.0, -3.0]),
            ([4.0, 4.0, 4.0], [-2.0, 0.0, 1.0]),
            ([0.0, 0.0, 0.0], [0.0, -7.0, 0.0]),
            ([1.0, 1.0, 1.0], [3.0, 4.0, 9.0]),
        ];
        for (start, end) in cases {
            let points = walk(start, end);
            assert_eq!(points.first(), Some(&start));
            let last = points.last().unwrap();
            for k in 0..3 {
                assert!((last[k] - end[k]).abs() < 1e-9, "{last:?} != {end:?}");
            }
        }
    }

    #[test]
    fn test_one_point_per_unit_of_driving_axis() {
        let points = walk([0.0, 0.0, 0.0], [0.0, 2.0, -6.0]);
        assert_eq!(points.len(), 7);
        assert_eq!(points[3], [0.0, 1.0, -3.0]);
    }

    #[test]
    fn test_axis_tie_break_order() {
        assert_eq!(driving_axis([3.0, -3.0, 3.0]), 0);
        assert_eq!(driving_axis([1.0, -3.0, 3.0]), 1);
        assert_eq!(driving_axis([1.0, 2.0, -3.0]), 2);
    }

    #[test]
    fn test_decreasing_traversal() {
        let points = walk([3.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_interpolation_is_not_snapped() {
        let points = walk([0.0, 0.0, 0.0], [4.0, 1.0, 0.0]);
        assert_eq!(points[1], [1.0, 0.25, 0.0]);
        assert_eq!(points[2], [2.0, 0.5, 0.0]);
    }

    #[test]
    fn test_non_finite_span_is_degenerate() {
        assert!(rasterize([0.0; 3], [f64::INFINITY, 0.0, 0.0]).is_none());
        assert!(rasterize([0.0; 3], [1.0, f64::NAN, 0.0]).is_none());
        assert!(rasterize([f64::NEG_INFINITY, 0.0, 0.0], [0.0; 3]).is_none());
    }

    #[test]
    fn test_huge_span_is_lazy() {
        let mut cells = rasterize([0.0; 3], [1e18, 0.0, 0.0]).unwrap();
        assert_eq!(cells.next(), Some([0.0, 0.0, 0.0]));
        assert_eq!(cells.next(), Some([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_fractional_span_stops_short_of_end() {
        let points = walk([0.5, 0.0, 0.0], [3.0, 0.0, 0.0]);
        assert_eq!(points, vec![[0.5, 0.0, 0.0], [1.5, 0.0, 0.0], [2.5, 0.0, 0.0]]);
    }
}
