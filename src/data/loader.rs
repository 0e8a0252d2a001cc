// ============================================================
// Layer 4 — Reference Dataset Loader
// ============================================================
// Loads the historical crop dataset used to populate the four
// dropdowns (State, District, Season, Crop).
//
// The CSV carries many more columns (yield, rainfall, ...) but
// only the four categorical ones are deserialised; csv + serde
// ignore the rest because ReferenceRow does not name them.
//
// A missing or unreadable file is NOT fatal: the loader warns,
// returns `DatasetLoad::Unavailable` with a notice for the page,
// and the dropdowns render empty.
//
// Reference: csv crate documentation (serde deserialisation)
//            Rust Book §8 (Collections), §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeSet, path::PathBuf};

use crate::domain::form::FormOptions;
use crate::domain::traits::OptionSource;

/// One row of the reference CSV, reduced to the columns we need
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Crop")]
    pub crop: String,
}

/// The loaded dataset. Read once at startup, never mutated.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    rows: Vec<ReferenceRow>,
}

impl ReferenceDataset {
    pub fn new(rows: Vec<ReferenceRow>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl OptionSource for ReferenceDataset {
    /// Distinct values per column, ascending. BTreeSet gives both
    /// de-duplication and ordering in one pass.
    fn form_options(&self) -> FormOptions {
        let mut states    = BTreeSet::new();
        let mut districts = BTreeSet::new();
        let mut seasons   = BTreeSet::new();
        let mut crops     = BTreeSet::new();

        for row in &self.rows {
            insert_non_empty(&mut states, &row.state);
            insert_non_empty(&mut districts, &row.district);
            insert_non_empty(&mut seasons, &row.season);
            insert_non_empty(&mut crops, &row.crop);
        }

        FormOptions {
            states:    states.into_iter().collect(),
            districts: districts.into_iter().collect(),
            seasons:   seasons.into_iter().collect(),
            crops:     crops.into_iter().collect(),
        }
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}

/// Reads the reference CSV from a fixed path.
pub struct ReferenceDatasetLoader {
    path: PathBuf,
}

/// Result of a load attempt: the dataset, or the notice to show
/// users when it could not be read.
#[derive(Debug, Clone)]
pub enum DatasetLoad {
    Loaded(ReferenceDataset),
    Unavailable { notice: String },
}

impl DatasetLoad {
    pub fn dataset(&self) -> Option<&ReferenceDataset> {
        match self {
            DatasetLoad::Loaded(ds)        => Some(ds),
            DatasetLoad::Unavailable { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            DatasetLoad::Loaded(_)              => None,
            DatasetLoad::Unavailable { notice } => Some(notice.as_str()),
        }
    }

    /// Dropdown options, empty when the dataset is unavailable
    pub fn form_options(&self) -> FormOptions {
        self.dataset()
            .map(|ds| ds.form_options())
            .unwrap_or_default()
    }
}

impl ReferenceDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the dataset, degrading to `Unavailable` instead of failing.
    pub fn load(&self) -> DatasetLoad {
        if !self.path.exists() {
            let notice = format!(
                "Could not find '{}'. Please save the cleaned dataset from your training notebook.",
                self.path.display()
            );
            tracing::warn!("{notice}");
            return DatasetLoad::Unavailable { notice };
        }

        match self.read_rows() {
            Ok(rows) => {
                let dataset = ReferenceDataset::new(rows);
                tracing::info!(
                    "Loaded {} reference rows from '{}'",
                    dataset.row_count(),
                    self.path.display()
                );
                DatasetLoad::Loaded(dataset)
            }
            Err(e) => {
                let notice = format!("Could not read reference dataset: {e:#}");
                tracing::warn!("{notice}");
                DatasetLoad::Unavailable { notice }
            }
        }
    }

    fn read_rows(&self) -> Result<Vec<ReferenceRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        let mut rows = Vec::new();
        for (i, result) in reader.deserialize::<ReferenceRow>().enumerate() {
            // Line numbers are 1-based and the header is line 1
            let row = result.with_context(|| {
                format!("Malformed row at line {} of '{}'", i + 2, self.path.display())
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CSV: &str = "\
State,District,Year,Season,Crop,Area_Hectare,Yield
Punjab,Ludhiana,2019,Kharif,Rice,120.0,4.1
Haryana,Karnal,2019,Rabi,Wheat,80.0,3.9
Punjab,Amritsar,2020,Rabi,Wheat,95.5,4.0
Punjab,Ludhiana,2020,Kharif,Rice,130.0,4.3
";

    #[test]
    fn test_distinct_sorted_options() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("crops.csv");
        fs::write(&path, CSV).unwrap();

        let load = ReferenceDatasetLoader::new(&path).load();
        assert!(load.notice().is_none());
        assert_eq!(load.dataset().unwrap().row_count(), 4);

        let options = load.form_options();
        assert_eq!(options.states, vec!["Haryana", "Punjab"]);
        assert_eq!(options.districts, vec!["Amritsar", "Karnal", "Ludhiana"]);
        assert_eq!(options.seasons, vec!["Kharif", "Rabi"]);
        assert_eq!(options.crops, vec!["Rice", "Wheat"]);
    }

    #[test]
    fn test_missing_file_degrades_to_empty_lists() {
        let dir  = tempfile::tempdir().unwrap();
        let load = ReferenceDatasetLoader::new(dir.path().join("absent.csv")).load();

        assert!(load.dataset().is_none());
        assert!(load.notice().unwrap().contains("absent.csv"));
        assert!(load.form_options().is_empty());
    }

    #[test]
    fn test_missing_required_column_is_reported_not_fatal() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        fs::write(&path, "State,District,Crop\nPunjab,Ludhiana,Rice\n").unwrap();

        let load = ReferenceDatasetLoader::new(&path).load();
        assert!(load.dataset().is_none());
        assert!(load.notice().is_some());
    }

    #[test]
    fn test_blank_cells_are_skipped() {
        let ds = ReferenceDataset::new(vec![ReferenceRow {
            state:    "Punjab".into(),
            district: String::new(),
            season:   "Kharif".into(),
            crop:     "Rice".into(),
        }]);
        let options = ds.form_options();
        assert_eq!(options.states, vec!["Punjab"]);
        assert!(options.districts.is_empty());
    }
}
