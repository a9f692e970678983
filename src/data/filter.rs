use std::collections::{BTreeMap, BTreeSet};

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Filter criteria: age range + per-column value selections
// ---------------------------------------------------------------------------

/// Numeric column driven by the age range slider.
pub const AGE_COLUMN: &str = "age";

/// Categorical columns that get a multiselect filter when present.
pub const FILTER_COLUMNS: &[&str] = &["job", "marital", "education", "contact"];

/// The conjunction of user-chosen predicates defining the visible rows.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Inclusive age bounds; `None` when the dataset has no age column.
    pub age_range: Option<(i64, i64)>,
    /// Per-column selected values. An empty set excludes every row:
    /// membership in the empty set is false, so "nothing selected" means
    /// "show nothing", not "show everything".
    pub selections: BTreeMap<String, BTreeSet<CellValue>>,
}

/// Initialise criteria covering the full observed domain of every column,
/// so the initial filtered view equals the full dataset.
pub fn init_criteria(dataset: &Dataset) -> FilterCriteria {
    let age_range = dataset
        .column_range(AGE_COLUMN)
        .map(|(lo, hi)| (lo as i64, hi as i64));

    let selections = FILTER_COLUMNS
        .iter()
        .filter_map(|col| {
            dataset
                .unique_values
                .get(*col)
                .map(|vals| (col.to_string(), vals.clone()))
        })
        .collect();

    FilterCriteria {
        age_range,
        selections,
    }
}

/// Return indices of rows that pass all active predicates.
///
/// A row passes when:
/// * its age is numeric and inside the inclusive range (rows with a missing
///   or non-numeric age fail an active age predicate), and
/// * for every filtered column, its value is in the selected set. A set
///   containing every unique value is no constraint; an empty set excludes
///   everything; a row missing the column passes only if `Null` is selected.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if let Some((lo, hi)) = criteria.age_range {
                let age = row.get(AGE_COLUMN).and_then(CellValue::as_f64);
                match age {
                    Some(a) => {
                        if a < lo as f64 || a > hi as f64 {
                            return false;
                        }
                    }
                    None => return false,
                }
            }

            for (col, selected) in &criteria.selections {
                if selected.is_empty() {
                    // Nothing selected for this column → hide everything
                    return false;
                }
                // Check all unique values are selected → no effective filter
                if let Some(all_vals) = dataset.unique_values.get(col) {
                    if selected.len() == all_vals.len() {
                        continue;
                    }
                }
                match row.get(col) {
                    Some(val) => {
                        if !selected.contains(val) {
                            return false;
                        }
                    }
                    None => {
                        if !selected.contains(&CellValue::Null) {
                            return false;
                        }
                    }
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn record(age: i64, job: &str) -> Record {
        let mut r = Record::new();
        r.insert("age".into(), CellValue::Integer(age));
        r.insert("job".into(), text(job));
        r
    }

    /// One row inside and one outside each bound of the age/job fixture.
    fn fixture() -> Dataset {
        Dataset::from_rows(
            vec!["age".into(), "job".into()],
            vec![
                record(29, "admin."),      // below age range
                record(30, "admin."),      // inside on both
                record(35, "technician"),  // inside on both
                record(40, "services"),    // age inside, job outside
                record(41, "technician"),  // above age range
            ],
        )
    }

    #[test]
    fn full_domain_criteria_keep_every_row() {
        let ds = fixture();
        let criteria = init_criteria(&ds);
        let visible = filtered_indices(&ds, &criteria);
        assert_eq!(visible, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn age_range_and_job_selection_conjoin() {
        let ds = fixture();
        let mut criteria = init_criteria(&ds);
        criteria.age_range = Some((30, 40));
        criteria.selections.insert(
            "job".into(),
            [text("admin."), text("technician")].into_iter().collect(),
        );

        let visible = filtered_indices(&ds, &criteria);
        assert_eq!(visible, vec![1, 2]);

        // Every visible row satisfies every predicate; every hidden row
        // violates at least one.
        for (i, row) in ds.rows.iter().enumerate() {
            let age = row.get("age").and_then(CellValue::as_f64).unwrap();
            let job = row.get("job").unwrap();
            let passes = (30.0..=40.0).contains(&age)
                && (job == &text("admin.") || job == &text("technician"));
            assert_eq!(visible.contains(&i), passes, "row {i}");
        }
    }

    #[test]
    fn empty_selection_excludes_all_rows() {
        let ds = fixture();
        let mut criteria = init_criteria(&ds);
        criteria.selections.insert("job".into(), BTreeSet::new());
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn missing_age_fails_an_active_range() {
        let mut rows = vec![record(35, "admin.")];
        let mut no_age = Record::new();
        no_age.insert("age".into(), CellValue::Null);
        no_age.insert("job".into(), text("admin."));
        rows.push(no_age);

        let ds = Dataset::from_rows(vec!["age".into(), "job".into()], rows);
        let mut criteria = init_criteria(&ds);
        criteria.age_range = Some((30, 40));
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let ds = fixture();
        let mut criteria = init_criteria(&ds);
        criteria.age_range = Some((30, 40));
        let a = filtered_indices(&ds, &criteria);
        let b = filtered_indices(&ds, &criteria);
        assert_eq!(a, b);
    }
}
