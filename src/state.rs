use std::collections::BTreeSet;

use crate::data::filter::{init_criteria, FilterCriteria};
use crate::data::model::{CellValue, Dataset};
use crate::data::view::{render, ViewModel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Current filter criteria (age range + per-column selections).
    pub criteria: FilterCriteria,

    /// Observed age domain, bounding the range sliders.
    pub age_domain: Option<(i64, i64)>,

    /// Derived view for the current criteria (cached between frames).
    pub view: Option<ViewModel>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            age_domain: None,
            view: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and initialise criteria to the full
    /// domain, so the initial view equals the whole dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.criteria = init_criteria(&dataset);
        self.age_domain = self.criteria.age_range;
        self.view = Some(render(&dataset, &self.criteria));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute the view after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = Some(render(ds, &self.criteria));
        }
    }

    /// Set the inclusive age bounds, keeping min ≤ max.
    pub fn set_age_range(&mut self, lo: i64, hi: i64) {
        self.criteria.age_range = Some((lo.min(hi), lo.max(hi)));
        self.refilter();
    }

    /// Toggle a single value in a column's selection.
    pub fn toggle_filter_value(&mut self, column: &str, value: &CellValue) {
        let selected = self.criteria.selections.entry(column.to_string()).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: &str) {
        if let Some(ds) = &self.dataset {
            if let Some(all_vals) = ds.unique_values.get(column) {
                self.criteria
                    .selections
                    .insert(column.to_string(), all_vals.clone());
                self.refilter();
            }
        }
    }

    /// Deselect all values in a column. The empty selection excludes every
    /// row (membership in the empty set is false).
    pub fn select_none(&mut self, column: &str) {
        self.criteria
            .selections
            .insert(column.to_string(), BTreeSet::new());
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let mut rows = Vec::new();
        for (age, job) in [(25, "admin."), (35, "technician"), (45, "admin.")] {
            let mut r = Record::new();
            r.insert("age".into(), CellValue::Integer(age));
            r.insert("job".into(), CellValue::Text(job.to_string()));
            rows.push(r);
        }
        Dataset::from_rows(vec!["age".into(), "job".into()], rows)
    }

    #[test]
    fn set_dataset_shows_everything() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        let view = state.view.as_ref().unwrap();
        assert_eq!(view.visible.len(), 3);
        assert_eq!(state.age_domain, Some((25, 45)));
    }

    #[test]
    fn toggling_a_value_refilters() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.toggle_filter_value("job", &CellValue::Text("admin.".into()));
        assert_eq!(state.view.as_ref().unwrap().visible, vec![1]);

        state.select_all("job");
        assert_eq!(state.view.as_ref().unwrap().visible.len(), 3);

        state.select_none("job");
        assert!(state.view.as_ref().unwrap().visible.is_empty());
    }

    #[test]
    fn age_range_is_normalised() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_age_range(40, 30);
        assert_eq!(state.criteria.age_range, Some((30, 40)));
        assert_eq!(state.view.as_ref().unwrap().visible, vec![1]);
    }
}
