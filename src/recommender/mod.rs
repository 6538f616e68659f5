//! Similarity recommenders.
//!
//! Every recommender ranks dataset rows against a query by cosine similarity
//! of bag-of-words vectors and hands back the rows' original column values.

pub mod course;
pub mod internship;
pub mod resume_skill;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{RecommendError, Result};
use crate::vectorizer::{count::CountVectorizer, evaluate::scoring::{cosine_scores, Hits}};

pub use course::CourseRecommender;
pub use internship::InternshipRecommender;
pub use resume_skill::ResumeSkillRecommender;

/// Column layout of one recommendation feature
#[derive(Debug, Clone, Copy)]
pub struct FeatureSchema {
    /// Feature name used in errors and logs
    pub name: &'static str,
    /// Columns concatenated into the per-row corpus text; all required
    pub text_columns: &'static [&'static str],
    /// Columns returned for every ranked row
    pub output_columns: &'static [&'static str],
    /// Name under which the corpus text itself can be returned
    pub derived_column: Option<&'static str>,
}

/// One ranked row
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedRow {
    /// Position of the row in the dataset
    pub index: usize,
    /// Cosine similarity, never negative
    pub score: f64,
    /// Output column -> original cell value
    pub fields: IndexMap<String, String>,
}

/// Ranked rows plus the output columns the dataset could not provide
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recommendation {
    pub rows: Vec<RecommendedRow>,
    pub missing_columns: Vec<String>,
}

impl Recommendation {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// false when no row shares a term with the query.
    /// An all-zero ranking is only row order and should be shown as "no match".
    pub fn has_match(&self) -> bool {
        self.rows.iter().any(|row| row.score > 0.0)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.index).collect()
    }
}

#[derive(Debug, Clone)]
enum OutputSource {
    Column(usize),
    Derived,
}

/// Shared ranking core for one dataset and schema
#[derive(Debug, Clone)]
pub struct SimilarityRecommender {
    schema: FeatureSchema,
    dataset: Dataset,
    /// lowercase corpus text per row
    corpus: Vec<String>,
    outputs: Vec<(String, OutputSource)>,
    missing_columns: Vec<String>,
}

impl SimilarityRecommender {
    /// Validate the schema against `dataset` and build the corpus text.
    /// Fails with `RecommendError::Data` when a text column is missing.
    pub fn new(dataset: Dataset, schema: FeatureSchema) -> Result<Self> {
        let text_columns = schema
            .text_columns
            .iter()
            .map(|name| dataset.require_column(schema.name, name))
            .collect::<Result<Vec<_>>>()?;
        let corpus = dataset.corpus_text(&text_columns);

        let mut outputs = Vec::with_capacity(schema.output_columns.len());
        let mut missing_columns = Vec::new();
        for &name in schema.output_columns {
            if schema.derived_column == Some(name) {
                outputs.push((name.to_string(), OutputSource::Derived));
            } else if let Some(col) = dataset.column_index(name) {
                outputs.push((name.to_string(), OutputSource::Column(col)));
            } else {
                missing_columns.push(name.to_string());
            }
        }
        if !missing_columns.is_empty() {
            tracing::warn!(
                feature = schema.name,
                missing = ?missing_columns,
                "dataset lacks some output columns"
            );
        }
        debug!(feature = schema.name, rows = dataset.len(), "built corpus");

        Ok(Self {
            schema,
            dataset,
            corpus,
            outputs,
            missing_columns,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Rank rows against `query_terms`.
    ///
    /// The vocabulary is refitted on every call over all row texts plus the
    /// query as one extra document, so the query's own terms are always in
    /// the space. Ties keep row order.
    pub fn recommend<S: AsRef<str>>(&self, query_terms: &[S], top_n: usize) -> Result<Recommendation> {
        let query = join_query(query_terms)?;

        let mut documents: Vec<&str> = self.corpus.iter().map(String::as_str).collect();
        documents.push(&query);
        let mut vectorizer = CountVectorizer::new();
        let vectors = vectorizer.fit_transform(&documents);
        let Some((query_vec, row_vectors)) = vectors.split_last() else {
            return Ok(self.collect_rows(&Hits::new(Vec::new())));
        };

        let mut hits = cosine_scores(query_vec, row_vectors);
        hits.sort_by_score_desc().truncate(top_n);
        debug!(
            feature = self.schema.name,
            query = %query,
            vocabulary = vectorizer.vocabulary_size(),
            returned = hits.len(),
            "ranked rows"
        );
        Ok(self.collect_rows(&hits))
    }

    /// Materialize ranked hits into rows with their output columns
    pub fn collect_rows(&self, hits: &Hits<usize>) -> Recommendation {
        let rows = hits
            .list
            .iter()
            .map(|&(index, score)| RecommendedRow {
                index,
                score,
                fields: self.row_fields(index),
            })
            .collect();
        Recommendation {
            rows,
            missing_columns: self.missing_columns.clone(),
        }
    }

    fn row_fields(&self, index: usize) -> IndexMap<String, String> {
        self.outputs
            .iter()
            .map(|(name, source)| {
                let value = match source {
                    OutputSource::Column(col) => self.dataset.cell(index, *col).to_string(),
                    OutputSource::Derived => self.corpus[index].clone(),
                };
                (name.clone(), value)
            })
            .collect()
    }
}

/// Join non-blank query terms into one lowercase document
fn join_query<S: AsRef<str>>(query_terms: &[S]) -> Result<String> {
    let terms: Vec<&str> = query_terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return Err(RecommendError::EmptyQuery);
    }
    Ok(terms.join(" ").to_lowercase())
}

/// Split comma-separated user input into trimmed, non-empty terms
pub fn parse_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: FeatureSchema = FeatureSchema {
        name: "test",
        text_columns: &["skills"],
        output_columns: &["title", "skills", "salary"],
        derived_column: None,
    };

    fn recommender() -> SimilarityRecommender {
        let ds = Dataset::new(
            ["title", "skills"],
            vec![
                vec!["Data Intern", "python sql"],
                vec!["Backend Intern", "java spring"],
                vec!["Analyst", "python pandas"],
            ],
        );
        SimilarityRecommender::new(ds, SCHEMA).unwrap()
    }

    #[test]
    fn python_query_returns_python_rows_in_order() {
        let rec = recommender().recommend(&["python"], 2).unwrap();
        assert_eq!(rec.indices(), vec![0, 2]);
        assert!(rec.has_match());
    }

    #[test]
    fn header_only_dataset_returns_no_rows() {
        let ds = Dataset::new(["title", "skills"], Vec::<Vec<String>>::new());
        let rec = SimilarityRecommender::new(ds, SCHEMA).unwrap();
        let result = rec.recommend(&["python"], 5).unwrap();
        assert!(result.rows.is_empty());
        assert!(!result.has_match());
        assert_eq!(result.missing_columns, vec!["salary"]);
    }

    #[test]
    fn denser_row_ranks_first() {
        let ds = Dataset::new(
            ["title", "skills"],
            vec![vec!["a", "python sql java"], vec!["b", "python python"]],
        );
        let rec = SimilarityRecommender::new(ds, SCHEMA).unwrap();
        assert_eq!(rec.recommend(&["Python"], 2).unwrap().indices(), vec![1, 0]);
    }

    #[test]
    fn results_are_bounded_and_deterministic() {
        let rec = recommender();
        let a = rec.recommend(&["python", "java"], 10).unwrap();
        let b = rec.recommend(&["python", "java"], 10).unwrap();
        assert_eq!(a.indices(), b.indices());
        assert_eq!(a.len(), 3);
        assert_eq!(rec.recommend(&["python"], 1).unwrap().len(), 1);
        assert!(a.rows.iter().all(|r| r.score >= 0.0));
    }

    #[test]
    fn unknown_terms_give_all_zero_ranking() {
        let rec = recommender().recommend(&["cobol"], 2).unwrap();
        assert_eq!(rec.indices(), vec![0, 1]);
        assert!(!rec.has_match());
    }

    #[test]
    fn empty_query_is_rejected() {
        let rec = recommender();
        assert!(matches!(rec.recommend::<&str>(&[], 5), Err(RecommendError::EmptyQuery)));
        assert!(matches!(rec.recommend(&["  ", ""], 5), Err(RecommendError::EmptyQuery)));
    }

    #[test]
    fn original_values_returned_and_missing_columns_reported() {
        let rec = recommender().recommend(&["java"], 1).unwrap();
        let row = &rec.rows[0];
        assert_eq!(row.fields["title"], "Backend Intern");
        assert_eq!(row.fields.len(), 2);
        assert_eq!(rec.missing_columns, vec!["salary"]);
    }

    #[test]
    fn missing_text_column_is_a_data_error() {
        let ds = Dataset::new(["title"], vec![vec!["x"]]);
        assert!(matches!(
            SimilarityRecommender::new(ds, SCHEMA),
            Err(RecommendError::Data(_))
        ));
    }

    #[test]
    fn parse_terms_splits_on_commas() {
        assert_eq!(parse_terms(" Python, ,SQL ,"), vec!["Python", "SQL"]);
    }
}
