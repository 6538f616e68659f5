use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::config::DEFAULT_SIMILAR_TOP_N;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::recommender::{FeatureSchema, Recommendation, SimilarityRecommender};
use crate::utils::math::vector::SparseVec;
use crate::vectorizer::{count::CountVectorizer, evaluate::scoring::cosine_scores};

pub const SKILLS_REQUIRED: &str = "skills_required";
pub const ALL_SKILLS: &str = "all_skills";

/// Resumes described by their known skills; `all_skills` is derived from the text columns
pub const RESUME_SKILL_SCHEMA: FeatureSchema = FeatureSchema {
    name: "resume skill",
    text_columns: &["skills", "related_skils_in_job", "certification_skills"],
    output_columns: &["job_position_name", SKILLS_REQUIRED, ALL_SKILLS, "matched_score"],
    derived_column: Some(ALL_SKILLS),
};

/// Skill gaps and similar resumes by row index
#[derive(Debug, Clone)]
pub struct ResumeSkillRecommender {
    inner: SimilarityRecommender,
    skills_required: usize,
    /// term counts of every row's `all_skills`, fitted once
    vectors: Vec<SparseVec<u32>>,
}

impl ResumeSkillRecommender {
    pub fn new(dataset: Dataset) -> Result<Self> {
        let skills_required = dataset.require_column(RESUME_SKILL_SCHEMA.name, SKILLS_REQUIRED)?;
        let inner = SimilarityRecommender::new(dataset, RESUME_SKILL_SCHEMA)?;

        // no query document takes part, so one fit serves every call
        let mut vectorizer = CountVectorizer::new();
        let vectors = vectorizer.fit_transform(inner.corpus());
        debug!(
            rows = vectors.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "fitted resume skill vectors"
        );

        Ok(Self {
            inner,
            skills_required,
            vectors,
        })
    }

    /// Required skills the resume at `index` does not list.
    /// Terms are whitespace tokens, compared lowercase.
    pub fn missing_skills(&self, index: usize) -> Result<BTreeSet<String>> {
        let dataset = self.inner.dataset();
        dataset.check_index(index)?;

        let known: HashSet<&str> = self.inner.corpus()[index].split_whitespace().collect();
        let required = dataset.cell(index, self.skills_required).to_lowercase();
        Ok(required
            .split_whitespace()
            .filter(|term| !known.contains(term))
            .map(str::to_string)
            .collect())
    }

    /// Resumes most similar to the one at `index`, never including itself
    pub fn similar_rows(&self, index: usize, top_n: usize) -> Result<Recommendation> {
        self.inner.dataset().check_index(index)?;

        let mut hits = cosine_scores(&self.vectors[index], &self.vectors);
        hits.list.retain(|&(row, _)| row != index);
        hits.sort_by_score_desc().truncate(top_n);
        Ok(self.inner.collect_rows(&hits))
    }

    pub fn similar_rows_default(&self, index: usize) -> Result<Recommendation> {
        self.similar_rows(index, DEFAULT_SIMILAR_TOP_N)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
