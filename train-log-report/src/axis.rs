//! Axis range and line segment helpers
//!
//! Non-finite values never reach the plotting backend: they are left out of
//! axis ranges and break a line into separate segments.

use std::ops::Range;

/// Relative margin added on both ends of a data range
const MARGIN: f64 = 0.05;

/// A closed data range for one chart axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    /// Range covering all finite values with a 5% margin
    ///
    /// An empty or constant input is widened around its value so the chart
    /// always has a non-zero extent.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }

        if min > max {
            return Self { start: 0.0, end: 1.0 };
        }

        let span = max - min;
        let pad = if span > 0.0 && span.is_finite() {
            span * MARGIN
        } else {
            (min.abs() * MARGIN).max(0.5)
        };

        Self {
            start: min - pad,
            end: max + pad,
        }
    }

    pub fn as_range(&self) -> Range<f64> {
        self.start..self.end
    }
}

/// Split points into runs of consecutive finite points
pub fn finite_segments(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_range_with_margin() {
        let range = AxisRange::from_values(vec![0.0, 10.0, 5.0]);
        assert_close(range.start, -0.5);
        assert_close(range.end, 10.5);
    }

    #[test]
    fn test_constant_range_is_widened() {
        let range = AxisRange::from_values(vec![3.0]);
        assert!(range.start < 3.0 && range.end > 3.0);

        let zero = AxisRange::from_values(vec![0.0, 0.0]);
        assert_eq!(zero, AxisRange { start: -0.5, end: 0.5 });
    }

    #[test]
    fn test_non_finite_values_ignored() {
        let range = AxisRange::from_values(vec![f64::NAN, 1.0, f64::INFINITY, 3.0]);
        assert_close(range.start, 0.9);
        assert_close(range.end, 3.1);

        let none = AxisRange::from_values(vec![f64::NAN]);
        assert_eq!(none, AxisRange { start: 0.0, end: 1.0 });
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let points = vec![
            (0.0, 1.0),
            (1.0, 2.0),
            (2.0, f64::NAN),
            (3.0, 4.0),
            (4.0, f64::NEG_INFINITY),
        ];
        let segments = finite_segments(&points);

        assert_eq!(segments, vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]);
        assert!(finite_segments(&[]).is_empty());
    }
}
