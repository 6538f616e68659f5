use crate::config::DEFAULT_TOP_N;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::recommender::{FeatureSchema, Recommendation, SimilarityRecommender};

/// Internship postings matched on title, company and location
pub const INTERNSHIP_SCHEMA: FeatureSchema = FeatureSchema {
    name: "internship",
    text_columns: &["internship_title", "company_name", "location"],
    output_columns: &["internship_title", "company_name", "location", "stipend", "skills"],
    derived_column: None,
};

/// Ranks internship postings against a user's skills
#[derive(Debug, Clone)]
pub struct InternshipRecommender {
    inner: SimilarityRecommender,
}

impl InternshipRecommender {
    pub fn new(dataset: Dataset) -> Result<Self> {
        Ok(Self {
            inner: SimilarityRecommender::new(dataset, INTERNSHIP_SCHEMA)?,
        })
    }

    pub fn recommend<S: AsRef<str>>(&self, skills: &[S], top_n: usize) -> Result<Recommendation> {
        self.inner.recommend(skills, top_n)
    }

    /// `recommend` with the default result count
    pub fn recommend_default<S: AsRef<str>>(&self, skills: &[S]) -> Result<Recommendation> {
        self.recommend(skills, DEFAULT_TOP_N)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
