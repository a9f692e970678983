use std::collections::BTreeMap;

use super::filter::AGE_COLUMN;
use super::model::{CellValue, Dataset};

/// Outcome column of the marketing campaign (`yes` / `no`).
pub const OUTCOME_COLUMN: &str = "y";
/// Positive class of the outcome column.
pub const POSITIVE_OUTCOME: &str = "yes";

// ---------------------------------------------------------------------------
// Summary – scalar metrics over the filtered view
// ---------------------------------------------------------------------------

/// Scalar aggregates over the filtered view. `None` encodes the "N/A"
/// sentinel: the view is empty or the relevant column is absent. Division by
/// zero is impossible by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Rows in the filtered view.
    pub total: usize,
    /// Mean of non-null ages; `None` when no ages are available.
    pub mean_age: Option<f64>,
    /// Percentage of rows with outcome == "yes", in [0, 100].
    pub conversion_rate: Option<f64>,
    /// Count of rows with outcome == "yes".
    pub conversions: Option<usize>,
}

/// Compute the summary metrics for the given row indices.
pub fn summarize(dataset: &Dataset, indices: &[usize]) -> Summary {
    let total = indices.len();

    let ages: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.rows[i].get(AGE_COLUMN).and_then(CellValue::as_f64))
        .collect();
    let mean_age = if ages.is_empty() {
        None
    } else {
        Some(ages.iter().sum::<f64>() / ages.len() as f64)
    };

    let (conversion_rate, conversions) = if total == 0 || !dataset.has_column(OUTCOME_COLUMN) {
        (None, None)
    } else {
        let yes = indices
            .iter()
            .filter(|&&i| {
                matches!(
                    dataset.rows[i].get(OUTCOME_COLUMN),
                    Some(CellValue::Text(s)) if s == POSITIVE_OUTCOME
                )
            })
            .count();
        (Some(yes as f64 / total as f64 * 100.0), Some(yes))
    };

    Summary {
        total,
        mean_age,
        conversion_rate,
        conversions,
    }
}

// ---------------------------------------------------------------------------
// Value counts – (category, count) table for the bar chart
// ---------------------------------------------------------------------------

/// Group the view by a categorical column and count occurrences, sorted by
/// count descending (ties by label so the order is stable). Counts sum to
/// the size of the view.
pub fn value_counts(dataset: &Dataset, indices: &[usize], column: &str) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for &i in indices {
        let label = match dataset.rows[i].get(column) {
            Some(CellValue::Null) | None => "<null>".to_string(),
            Some(v) => v.to_string(),
        };
        *counts.entry(label).or_default() += 1;
    }
    let mut table: Vec<(String, usize)> = counts.into_iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table
}

// ---------------------------------------------------------------------------
// Histogram – equal-width bins for a numeric column
// ---------------------------------------------------------------------------

/// Equal-width histogram: bin centres and counts.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// (bin centre, count) per bin.
    pub bars: Vec<(f64, usize)>,
    pub bin_width: f64,
}

/// Bin the numeric values of a column over its observed range.
/// Returns `None` when the view holds no numeric values for the column.
pub fn histogram(
    dataset: &Dataset,
    indices: &[usize],
    column: &str,
    bins: usize,
) -> Option<Histogram> {
    let values: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.rows[i].get(column).and_then(CellValue::as_f64))
        .collect();
    if values.is_empty() || bins == 0 {
        return None;
    }

    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate range: a single bin holding everything.
    let bin_width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };
    let n_bins = if hi > lo { bins } else { 1 };

    let mut counts = vec![0usize; n_bins];
    for v in &values {
        let idx = (((v - lo) / bin_width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bars = counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (lo + (i as f64 + 0.5) * bin_width, c))
        .collect();

    Some(Histogram { bars, bin_width })
}

// ---------------------------------------------------------------------------
// Pearson correlation over the numeric columns
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlations; symmetric, 1.0 on the diagonal, `NaN`
/// where a column has zero variance.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// data[i][j] = corr(columns[i], columns[j]).
    pub data: Vec<Vec<f64>>,
}

/// Compute the correlation matrix over all numeric columns of the view.
/// Returns `None` ("insufficient data") when the view is empty or no numeric
/// columns remain — never an error.
pub fn correlation_matrix(dataset: &Dataset, indices: &[usize]) -> Option<CorrelationMatrix> {
    if indices.is_empty() {
        return None;
    }
    let columns = dataset.numeric_columns();
    if columns.is_empty() {
        return None;
    }

    // Materialise each column once; nulls become NaN and drop out pairwise.
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|col| {
            indices
                .iter()
                .map(|&i| {
                    dataset.rows[i]
                        .get(col)
                        .and_then(CellValue::as_f64)
                        .unwrap_or(f64::NAN)
                })
                .collect()
        })
        .collect();

    let n = columns.len();
    let mut data = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                1.0
            } else {
                pearson(&series[i], &series[j])
            };
            data[i][j] = r;
            data[j][i] = r;
        }
    }

    Some(CorrelationMatrix { columns, data })
}

/// Pearson correlation of two equal-length series, skipping pairs where
/// either side is NaN. `NaN` when fewer than two pairs remain or a side has
/// zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(&x, &y)| (x, y))
        .collect();
    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn record(age: i64, job: &str, outcome: &str) -> Record {
        let mut r = Record::new();
        r.insert("age".into(), CellValue::Integer(age));
        r.insert("job".into(), text(job));
        r.insert("y".into(), text(outcome));
        r
    }

    fn fixture() -> Dataset {
        Dataset::from_rows(
            vec!["age".into(), "job".into(), "y".into()],
            vec![
                record(30, "admin.", "yes"),
                record(40, "admin.", "no"),
                record(50, "technician", "no"),
                record(60, "services", "yes"),
            ],
        )
    }

    #[test]
    fn summary_over_full_view() {
        let ds = fixture();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let s = summarize(&ds, &indices);

        assert_eq!(s.total, 4);
        assert_eq!(s.mean_age, Some(45.0));
        assert_eq!(s.conversions, Some(2));
        let rate = s.conversion_rate.unwrap();
        assert!((rate - 50.0).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn empty_view_reports_sentinels_not_zero() {
        let ds = fixture();
        let s = summarize(&ds, &[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.mean_age, None);
        assert_eq!(s.conversion_rate, None);
        assert_eq!(s.conversions, None);
    }

    #[test]
    fn missing_outcome_column_reports_sentinels() {
        let ds = Dataset::from_rows(
            vec!["age".into()],
            vec![{
                let mut r = Record::new();
                r.insert("age".into(), CellValue::Integer(30));
                r
            }],
        );
        let s = summarize(&ds, &[0]);
        assert_eq!(s.conversion_rate, None);
        assert_eq!(s.conversions, None);
        assert_eq!(s.mean_age, Some(30.0));
    }

    #[test]
    fn value_counts_sum_to_view_size() {
        let ds = fixture();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let table = value_counts(&ds, &indices, "job");

        let total: usize = table.iter().map(|(_, c)| c).sum();
        assert_eq!(total, indices.len());
        // Sorted by count descending.
        assert_eq!(table[0], ("admin.".to_string(), 2));
    }

    #[test]
    fn histogram_counts_sum_to_view_size() {
        let ds = fixture();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let h = histogram(&ds, &indices, "age", 20).unwrap();
        let total: usize = h.bars.iter().map(|(_, c)| c).sum();
        assert_eq!(total, indices.len());
    }

    #[test]
    fn histogram_of_empty_view_is_none() {
        let ds = fixture();
        assert!(histogram(&ds, &[], "age", 20).is_none());
    }

    #[test]
    fn correlation_without_numeric_columns_is_insufficient_data() {
        let ds = Dataset::from_rows(
            vec!["job".into()],
            vec![{
                let mut r = Record::new();
                r.insert("job".into(), text("admin."));
                r
            }],
        );
        assert!(correlation_matrix(&ds, &[0]).is_none());
    }

    #[test]
    fn correlation_of_empty_view_is_insufficient_data() {
        let ds = fixture();
        assert!(correlation_matrix(&ds, &[]).is_none());
    }

    #[test]
    fn correlated_columns_reach_unity() {
        let mut rows = Vec::new();
        for i in 0..5 {
            let mut r = Record::new();
            r.insert("a".into(), CellValue::Integer(i));
            r.insert("b".into(), CellValue::Integer(2 * i + 1));
            rows.push(r);
        }
        let ds = Dataset::from_rows(vec!["a".into(), "b".into()], rows);
        let indices: Vec<usize> = (0..ds.len()).collect();
        let m = correlation_matrix(&ds, &indices).unwrap();

        assert_eq!(m.columns, vec!["a".to_string(), "b".to_string()]);
        assert!((m.data[0][1] - 1.0).abs() < 1e-9);
        assert_eq!(m.data[0][0], 1.0);
        assert_eq!(m.data[0][1], m.data[1][0]);
    }

    #[test]
    fn zero_variance_column_yields_nan_not_panic() {
        let xs = [1.0, 1.0, 1.0];
        let ys = [1.0, 2.0, 3.0];
        assert!(pearson(&xs, &ys).is_nan());
    }
}
