//! Feature trend evaluation
//!
//! For a target month `n` each feature's values over the window of months
//! `n-2 ..= n` are summed and compared against the feature's mean over the
//! whole table:
//!
//! ```text
//! difference = window_sum - mean
//! ```
//!
//! A feature triggers when `difference <= 0`. The window sum and the
//! all-rows mean are on different scales; this is the established metric
//! and is kept as-is. An empty window sums to zero and is compared the
//! same way.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ExtractResult;
use crate::table::MetricsTable;

/// Number of months in the evaluation window, including the target month.
pub const WINDOW_MONTHS: i64 = 3;

/// Trend of one feature for one target month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTrend {
    /// Feature (column) name
    pub feature: String,
    /// Mean over all rows, ignoring missing values
    pub mean: f64,
    /// Sum over the window rows, ignoring missing values
    pub window_sum: f64,
    /// Number of rows whose month falls inside the window
    pub window_rows: usize,
    /// `window_sum - mean`
    pub difference: f64,
}

impl FeatureTrend {
    /// Whether the feature is non-increasing relative to its mean.
    ///
    /// NaN differences (e.g. a column with no values) never trigger.
    pub fn is_triggered(&self) -> bool {
        self.difference <= 0.0
    }
}

/// First month of the window ending at `target`, clamped at `i64::MIN`.
fn window_start(target: i64) -> i64 {
    target.saturating_sub(WINDOW_MONTHS - 1)
}

/// Whether `month` lies inside the window ending at `target`.
fn in_window(month: f64, target: i64) -> bool {
    month >= window_start(target) as f64 && month <= target as f64
}

/// Mean of the finite values; NaN when there are none.
fn finite_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|x| x.is_finite())
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Compute the trend of each named feature for `month`.
///
/// Fails if the table lacks any of the named columns.
pub fn feature_trends<S: AsRef<str>>(
    table: &MetricsTable,
    month: i64,
    feature_names: &[S],
) -> ExtractResult<Vec<FeatureTrend>> {
    let window: Vec<bool> = table
        .months()
        .iter()
        .map(|&m| in_window(m, month))
        .collect();
    let window_rows = window.iter().filter(|&&inside| inside).count();

    if window_rows == 0 {
        tracing::warn!(
            "No rows for months {}..={}; window sums are zero",
            window_start(month),
            month
        );
    }

    feature_names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let values = table.column(name)?;

            let mean = finite_mean(values);
            let window_sum: f64 = values
                .iter()
                .zip(&window)
                .filter(|(v, &inside)| inside && v.is_finite())
                .map(|(v, _)| v)
                .sum();

            Ok(FeatureTrend {
                feature: name.to_string(),
                mean,
                window_sum,
                window_rows,
                difference: window_sum - mean,
            })
        })
        .collect()
}

/// Return the features whose window sum does not exceed their mean.
///
/// The result is always a subset of `feature_names`.
pub fn evaluate<S: AsRef<str>>(
    table: &MetricsTable,
    month: i64,
    feature_names: &[S],
) -> ExtractResult<BTreeSet<String>> {
    let trends = feature_trends(table, month, feature_names)?;

    for trend in &trends {
        tracing::debug!(
            month,
            feature = %trend.feature,
            mean = trend.mean,
            window_sum = trend.window_sum,
            difference = trend.difference,
            "feature trend"
        );
    }

    Ok(trends
        .into_iter()
        .filter(FeatureTrend::is_triggered)
        .map(|t| t.feature)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::features::TRACKED_FEATURES;
    use rstest::rstest;

    fn table(months: &[f64], feature: &str, values: &[f64]) -> MetricsTable {
        MetricsTable::new(months.to_vec())
            .with_column(feature, values.to_vec())
            .unwrap()
    }

    fn full_table(months: &[f64], values: &[f64]) -> MetricsTable {
        TRACKED_FEATURES
            .iter()
            .fold(MetricsTable::new(months.to_vec()), |t, name| {
                t.with_column(*name, values.to_vec()).unwrap()
            })
    }

    #[test]
    fn single_row_difference_is_zero_and_triggers() {
        let t = table(&[9.0], "t_graph_density", &[5.0]);
        let trends = feature_trends(&t, 9, &["t_graph_density"]).unwrap();

        assert_eq!(trends[0].mean, 5.0);
        assert_eq!(trends[0].window_sum, 5.0);
        assert_eq!(trends[0].difference, 0.0);
        assert!(trends[0].is_triggered());

        let triggered = evaluate(&t, 9, &["t_graph_density"]).unwrap();
        assert!(triggered.contains("t_graph_density"));
    }

    #[test]
    fn window_is_inclusive_of_three_months() {
        // months 1..=6, values 1..=6; mean 3.5
        let t = table(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            "st_num_dev",
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let trends = feature_trends(&t, 5, &["st_num_dev"]).unwrap();

        assert_eq!(trends[0].window_rows, 3);
        assert_eq!(trends[0].window_sum, 12.0);
        assert_eq!(trends[0].difference, 8.5);
    }

    #[rstest]
    #[case(1, 1.0, true)] // window 1-1..=1 holds 1.0, mean 2.0
    #[case(2, 3.0, false)] // 1.0 + 2.0 - 2.0 = 1.0 > 0
    #[case(20, 0.0, true)] // empty window sums to zero
    fn window_sum_against_mean(#[case] month: i64, #[case] sum: f64, #[case] triggered: bool) {
        let t = table(&[1.0, 2.0, 3.0], "t_net_overlap", &[1.0, 2.0, 3.0]);
        let trend = &feature_trends(&t, month, &["t_net_overlap"]).unwrap()[0];

        assert_eq!(trend.window_sum, sum);
        assert_eq!(trend.is_triggered(), triggered);
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(i64::MIN + 1)]
    #[case(i64::MAX)]
    fn extreme_months_do_not_overflow(#[case] month: i64) {
        let t = full_table(&[1.0, 2.0], &[1.0, 2.0]);
        let triggered = evaluate(&t, month, &TRACKED_FEATURES).unwrap();
        // no row falls in the window, so every feature sums to zero
        assert_eq!(triggered.len(), TRACKED_FEATURES.len());
    }

    #[test]
    fn mean_uses_all_rows_not_window() {
        let t = table(&[1.0, 2.0, 10.0], "t_num_dev_nodes", &[100.0, 100.0, 1.0]);
        let trend = &feature_trends(&t, 10, &["t_num_dev_nodes"]).unwrap()[0];

        assert_eq!(trend.mean, 67.0);
        assert_eq!(trend.window_sum, 1.0);
        assert!(trend.is_triggered());
    }

    #[test]
    fn missing_values_are_skipped() {
        let t = table(&[1.0, 2.0, 3.0], "t_graph_density", &[2.0, f64::NAN, 4.0]);
        let trend = &feature_trends(&t, 3, &["t_graph_density"]).unwrap()[0];

        assert_eq!(trend.mean, 3.0);
        assert_eq!(trend.window_sum, 6.0);
    }

    #[test]
    fn all_missing_column_never_triggers() {
        let t = table(&[1.0], "t_graph_density", &[f64::NAN]);
        let triggered = evaluate(&t, 1, &["t_graph_density"]).unwrap();
        assert!(triggered.is_empty());
    }

    #[test]
    fn missing_feature_column_fails() {
        let t = table(&[1.0], "t_graph_density", &[1.0]);
        let err = evaluate(&t, 1, &["st_num_dev"]).unwrap_err();
        assert!(matches!(err, ExtractError::MissingColumn { column } if column == "st_num_dev"));
    }

    #[test]
    fn result_is_subset_of_tracked_features() {
        let t = full_table(&[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]);
        let triggered = evaluate(&t, 1, &TRACKED_FEATURES).unwrap();

        assert!(triggered.iter().all(|f| TRACKED_FEATURES.contains(&f.as_str())));
    }

    #[test]
    fn all_positive_differences_trigger_nothing() {
        let t = full_table(&[7.0, 8.0, 9.0], &[1.0, 1.0, 1.0]);
        // window sum 3.0, mean 1.0
        assert!(evaluate(&t, 9, &TRACKED_FEATURES).unwrap().is_empty());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let t = full_table(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 1.0, 0.0, 2.0, 9.0]);
        let first = evaluate(&t, 3, &TRACKED_FEATURES).unwrap();
        let second = evaluate(&t, 3, &TRACKED_FEATURES).unwrap();
        assert_eq!(first, second);
    }
}
