use crate::config::DEFAULT_TOP_N;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::recommender::{FeatureSchema, Recommendation, SimilarityRecommender};

/// Courses matched on title and gained skills
pub const COURSE_SCHEMA: FeatureSchema = FeatureSchema {
    name: "course",
    text_columns: &["Title", "Gained Skills"],
    output_columns: &[
        "Title",
        "Institution",
        "Gained Skills",
        "Level",
        "Duration",
        "Rate",
        "Reviews",
    ],
    derived_column: None,
};

/// Ranks courses against the skills a user wants to learn
#[derive(Debug, Clone)]
pub struct CourseRecommender {
    inner: SimilarityRecommender,
}

impl CourseRecommender {
    pub fn new(dataset: Dataset) -> Result<Self> {
        Ok(Self {
            inner: SimilarityRecommender::new(dataset, COURSE_SCHEMA)?,
        })
    }

    pub fn recommend<S: AsRef<str>>(&self, skills: &[S], top_n: usize) -> Result<Recommendation> {
        self.inner.recommend(skills, top_n)
    }

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
