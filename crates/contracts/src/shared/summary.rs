//! Aggregate summaries over record collections.
//!
//! Status-bucket counts, money sums, averages and percent-of-total. Every list
//! page computes its stat tiles from the unfiltered collection through these.

use super::error::SummaryError;
use crate::domain::common::Categorized;
use crate::enums::StatusCode;

/// Per-aggregate stat tile metrics.
pub trait Summarize: Sized {
    type Metrics;

    fn summarize(records: &[Self]) -> Self::Metrics;
}

/// Count of records per status, one bucket per variant in display order.
///
/// Buckets always sum to the number of tallied records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: StatusCode> {
    buckets: Vec<(S, usize)>,
}

impl<S: StatusCode> StatusCounts<S> {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut buckets: Vec<(S, usize)> = S::all().iter().map(|s| (*s, 0)).collect();
        for status in statuses {
            match buckets.iter_mut().find(|(s, _)| *s == status) {
                Some((_, n)) => *n += 1,
                None => buckets.push((status, 1)),
            }
        }
        Self { buckets }
    }

    pub fn tally<R>(records: &[R]) -> Self
    where
        R: Categorized<Status = S>,
    {
        Self::from_statuses(records.iter().map(|r| r.status()))
    }

    pub fn count(&self, status: S) -> usize {
        self.buckets
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.buckets.iter().copied()
    }
}

/// Plain addition of a money (or any numeric) field, in record order.
pub fn sum_by<R, F>(records: &[R], value: F) -> f64
where
    F: Fn(&R) -> f64,
{
    records.iter().map(value).sum()
}

/// Arithmetic mean of a numeric field.
///
/// `field` names the averaged field in the error.
pub fn average_by<R, F>(records: &[R], field: &'static str, value: F) -> Result<f64, SummaryError>
where
    F: Fn(&R) -> f64,
{
    if records.is_empty() {
        return Err(SummaryError::EmptyCollection { field });
    }
    Ok(sum_by(records, value) / records.len() as f64)
}

/// `round(matching / total * 100)`, half rounded up; `0` when `total == 0`.
///
/// Computed in integers: 29 of 200 is 15.
pub fn percent_of_total(matching: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let matching = matching as u64;
    let total = total as u64;
    ((matching * 200 + total) / (total * 2)) as u32
}

/// Share of `value` in `total` as a percentage with one decimal; `0.0` when `total <= 0`.
pub fn share_of_total(value: f64, total: f64) -> f64 {
    if !(total > 0.0) || !value.is_finite() {
        return 0.0;
    }
    (value / total * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Priority;

    #[test]
    fn test_status_counts_have_every_bucket() {
        let counts = StatusCounts::from_statuses(vec![Priority::Low, Priority::Low]);
        let buckets: Vec<_> = counts.iter().collect();
        assert_eq!(
            buckets,
            vec![(Priority::High, 0), (Priority::Medium, 0), (Priority::Low, 2)]
        );
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_average_of_empty_collection_fails() {
        let empty: Vec<f64> = vec![];
        assert_eq!(
            average_by(&empty, "value", |v| *v),
            Err(SummaryError::EmptyCollection { field: "value" })
        );
        assert_eq!(average_by(&[2.0, 4.0], "value", |v| *v), Ok(3.0));
    }

    #[test]
    fn test_percent_of_total() {
        assert_eq!(percent_of_total(0, 0), 0);
        assert_eq!(percent_of_total(5, 0), 0);
        assert_eq!(percent_of_total(1, 3), 33);
        assert_eq!(percent_of_total(2, 3), 67);
        assert_eq!(percent_of_total(1, 8), 13);
        assert_eq!(percent_of_total(29, 200), 15);
        assert_eq!(percent_of_total(3, 3), 100);
    }

    #[test]
    fn test_share_of_total() {
        assert_eq!(share_of_total(285_000.0, 877_000.0), 32.5);
        assert_eq!(share_of_total(74_000.0, 877_000.0), 8.4);
        assert_eq!(share_of_total(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_sum_is_plain_addition() {
        assert_eq!(sum_by(&[45_000.0, 78_000.0, 22_000.0], |v| *v), 145_000.0);
        let empty: Vec<f64> = vec![];
        assert_eq!(sum_by(&empty, |v| *v), 0.0);
    }
}
