//! Five-number summary with Tukey fences.
//!
//! Points beyond 1.5·IQR from the quartiles are mild outliers, points
//! beyond 3·IQR are extreme outliers. Whiskers (`min`, `max`) stop at the
//! most extreme values that are not outliers.

use crate::stats::{median, q1, q3};

/// Fence distance, in IQRs, for mild outliers.
pub const MILD_FENCE: f64 = 1.5;

/// Fence distance, in IQRs, for extreme outliers.
pub const EXTREME_FENCE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxplotSummary {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub median: f64,
    /// Lower whisker: smallest value not below the lower mild fence.
    pub min: f64,
    /// Upper whisker: largest value not above the upper mild fence.
    pub max: f64,
    pub lower_mild_fence: f64,
    pub upper_mild_fence: f64,
    pub lower_extreme_fence: f64,
    pub upper_extreme_fence: f64,
    /// Beyond a mild fence but not beyond the matching extreme fence, ascending.
    pub mild_outliers: Vec<f64>,
    /// Strictly beyond an extreme fence, ascending.
    pub extreme_outliers: Vec<f64>,
}

impl BoxplotSummary {
    /// Whether `x` would be drawn as an outlier of either kind.
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower_mild_fence || x > self.upper_mild_fence
    }

    /// Whether `x` lies strictly beyond an extreme fence.
    pub fn is_extreme(&self, x: f64) -> bool {
        x < self.lower_extreme_fence || x > self.upper_extreme_fence
    }
}

/// Summarizes `data` for a box-and-whisker plot.
///
/// Sorts a copy ascending; the input is left untouched. Quartiles follow
/// [`quartile`](crate::stats::quartile).
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::boxplot::boxplot;
/// let b = boxplot(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 100.0]).unwrap();
/// assert_eq!((b.q1, b.median, b.q3), (2.0, 3.0, 4.0));
/// assert_eq!(b.extreme_outliers, vec![100.0]);
/// assert_eq!(b.max, 5.0);
/// ```
pub fn boxplot(data: &[f64]) -> Option<BoxplotSummary> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = q1(&sorted)?;
    let q3 = q3(&sorted)?;
    let median = median(&sorted)?;
    let iqr = q3 - q1;

    let lower_mild_fence = q1 - iqr * MILD_FENCE;
    let upper_mild_fence = q3 + iqr * MILD_FENCE;
    let lower_extreme_fence = q1 - iqr * EXTREME_FENCE;
    let upper_extreme_fence = q3 + iqr * EXTREME_FENCE;
    log::debug!(
        "boxplot over {} points: mild fences [{lower_mild_fence}, {upper_mild_fence}], \
         extreme fences [{lower_extreme_fence}, {upper_extreme_fence}]",
        sorted.len()
    );

    let mut inliers = sorted
        .iter()
        .copied()
        .filter(|&x| x >= lower_mild_fence && x <= upper_mild_fence);
    let min = inliers.next().unwrap_or(f64::NAN);
    let max = inliers.last().unwrap_or(min);

    let mut summary = BoxplotSummary {
        q1,
        q3,
        iqr,
        median,
        min,
        max,
        lower_mild_fence,
        upper_mild_fence,
        lower_extreme_fence,
        upper_extreme_fence,
        mild_outliers: Vec::new(),
        extreme_outliers: Vec::new(),
    };
    for &x in &sorted {
        if summary.is_extreme(x) {
            summary.extreme_outliers.push(x);
        } else if summary.is_outlier(x) {
            summary.mild_outliers.push(x);
        }
    }
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_outlier() {
        let b = boxplot(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(b.iqr, 2.0);
        assert_eq!(b.lower_mild_fence, -1.0);
        assert_eq!(b.upper_mild_fence, 7.0);
        assert_eq!(b.lower_extreme_fence, -4.0);
        assert_eq!(b.upper_extreme_fence, 10.0);
        assert_eq!(b.min, 1.0);
        assert_eq!(b.max, 5.0);
        assert!(b.mild_outliers.is_empty());
        assert_eq!(b.extreme_outliers, vec![100.0]);
    }

    #[test]
    fn test_mild_outlier() {
        let b = boxplot(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 15.0]).unwrap();
        // q1 = 3, q3 = 7, iqr = 4: mild above 13, extreme above 19
        assert_eq!(b.mild_outliers, vec![15.0]);
        assert!(b.extreme_outliers.is_empty());
        assert_eq!(b.max, 8.0);
    }

    #[test]
    fn test_low_side_outliers() {
        let b = boxplot(&[-50.0, -10.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]).unwrap();
        // q1 = 10, q3 = 14, iqr = 4: mild below 4, extreme below -2
        assert_eq!(b.extreme_outliers, vec![-50.0, -10.0]);
        assert_eq!(b.min, 10.0);
    }

    #[test]
    fn test_unsorted_input_not_mutated() {
        let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let b = boxplot(&data).unwrap();
        assert_eq!(b.median, 3.0);
        assert_eq!(data, vec![5.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_point_on_extreme_fence_is_mild() {
        // q1 = 2, q3 = 4, upper extreme fence = 10
        let b = boxplot(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 10.0]).unwrap();
        assert_eq!(b.mild_outliers, vec![10.0]);
        assert!(b.extreme_outliers.is_empty());
    }

    #[test]
    fn test_single_value() {
        let b = boxplot(&[4.0]).unwrap();
        assert_eq!((b.q1, b.median, b.q3, b.iqr), (4.0, 4.0, 4.0, 0.0));
        assert_eq!((b.min, b.max), (4.0, 4.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(boxplot(&[]), None);
    }
}
