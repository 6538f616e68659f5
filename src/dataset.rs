//! In-memory table loaded once at start-up.
//!
//! Every cell is a `String`. Short rows are padded with `""` so text
//! concatenation over any column never fails.

use std::{fs::File, io::Read, path::Path};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{RecommendError, Result};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// header name -> column position
    columns: IndexMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from headers and rows.
    /// Rows shorter than the header are padded with empty strings, longer rows are truncated.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|h| h.into().trim().to_string()).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        let mut columns = IndexMap::with_capacity(width);
        for (pos, name) in headers.iter().enumerate() {
            // first occurrence wins on duplicated headers
            columns.entry(name.clone()).or_insert(pos);
        }

        Dataset { headers, rows, columns }
    }

    /// Load a CSV file with a header row
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RecommendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Load CSV from any reader. Records may have a varying number of fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }
        debug!(rows = rows.len(), "parsed csv records");
        Ok(Self::new(headers, rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Position of a column by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Position of a column that must exist for `feature` to work
    pub fn require_column(&self, feature: &str, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| RecommendError::missing_column(feature, name))
    }

    /// Cell value; out of range positions read as empty
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Check a row index against the dataset length
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(RecommendError::Index {
                index,
                len: self.rows.len(),
            })
        }
    }

    /// Lowercase concatenation of `columns` for every row, joined by a single space
    pub fn corpus_text(&self, columns: &[usize]) -> Vec<String> {
        (0..self.rows.len())
            .map(|row| {
                columns
                    .iter()
                    .map(|&col| self.cell(row, col))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded_with_empty_strings() {
        let csv = "a,b,c\n1,2,3\n4\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.cell(1, 0), "4");
        assert_eq!(ds.cell(1, 1), "");
        assert_eq!(ds.cell(1, 2), "");
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let csv = "Title,Gained Skills\n\"Intro, Part 1\",\"python, sql\"\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        let col = ds.column_index("Gained Skills").unwrap();
        assert_eq!(ds.cell(0, col), "python, sql");
    }

    #[test]
    fn corpus_text_joins_and_lowercases() {
        let ds = Dataset::new(["a", "b"], vec![vec!["Python", "SQL"], vec!["", "Java"]]);
        assert_eq!(ds.corpus_text(&[0, 1]), vec!["python sql", " java"]);
    }

    #[test]
    fn require_column_reports_missing_name() {
        let ds = Dataset::new(["a"], Vec::<Vec<String>>::new());
        let err = ds.require_column("course", "Title").unwrap_err();
        assert!(err.to_string().contains("Title"));
        assert!(matches!(err, RecommendError::Data(_)));
    }

    #[test]
    fn check_index_rejects_out_of_range() {
        let ds = Dataset::new(["a"], vec![vec!["x"]]);
        assert!(ds.check_index(0).is_ok());
        assert!(matches!(
            ds.check_index(1),
            Err(RecommendError::Index { index: 1, len: 1 })
        ));
    }

    #[test]
    fn from_csv_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_csv_path(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RecommendError::Io { .. }));
    }
}
