use super::filter::{filtered_indices, FilterCriteria, AGE_COLUMN};
use super::model::Dataset;
use super::summary::{
    correlation_matrix, histogram, summarize, value_counts, CorrelationMatrix, Histogram, Summary,
};

/// Categorical column shown in the frequency bar chart.
pub const JOB_COLUMN: &str = "job";
/// Number of bins in the age histogram.
pub const AGE_BINS: usize = 20;
/// Rows shown in the data preview table.
pub const PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// ViewModel – everything the UI needs for one frame
// ---------------------------------------------------------------------------

/// Derived, read-only state for one set of criteria. The host may call
/// [`render`] as often as it likes; the result depends only on its inputs.
#[derive(Debug, Clone)]
pub struct ViewModel {
    /// Indices of dataset rows passing the criteria.
    pub visible: Vec<usize>,
    pub summary: Summary,
    /// `None` when the view holds no ages.
    pub age_histogram: Option<Histogram>,
    /// (job, count), descending.
    pub job_counts: Vec<(String, usize)>,
    /// `None` when there is not enough numeric data.
    pub correlation: Option<CorrelationMatrix>,
}

/// Recompute the full view from scratch: filter, aggregate, derive tables.
/// Pure and stateless; re-run on every criteria change.
pub fn render(dataset: &Dataset, criteria: &FilterCriteria) -> ViewModel {
    let visible = filtered_indices(dataset, criteria);

    let summary = summarize(dataset, &visible);
    let age_histogram = histogram(dataset, &visible, AGE_COLUMN, AGE_BINS);
    let job_counts = value_counts(dataset, &visible, JOB_COLUMN);
    let correlation = correlation_matrix(dataset, &visible);

    ViewModel {
        visible,
        summary,
        age_histogram,
        job_counts,
        correlation,
    }
}
