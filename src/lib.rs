/// Recommendation utilities for a learning-management system:
/// internship and course recommendation, resume skill-gap analysis,
/// resume category prediction and a heuristic resume rating.
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod recommender;
pub mod utils;
pub mod vectorizer;

/// Tabular dataset
/// An in-memory table of string cells loaded from CSV.
/// Every row has exactly as many cells as there are headers; short rows
/// are padded with empty strings.
pub use dataset::Dataset;

/// Crate error type and result alias
pub use error::{RecommendError, Result};

/// Runtime configuration
/// Dataset paths, artifact directory and default result sizes.
/// `ClassifierConfig` is the subset the category classifier needs.
pub use config::{ClassifierConfig, Config};

/// Similarity recommenders
/// Rank dataset rows against a skill query by cosine similarity of
/// bag-of-words vectors.
/// - `InternshipRecommender`: internship listings
/// - `CourseRecommender`: online courses
/// - `ResumeSkillRecommender`: missing skills and similar resumes for a
///   resume row
///
/// Results come back as a `Recommendation`, which also lists the output
/// columns the dataset could not provide.
pub use recommender::{
    CourseRecommender, InternshipRecommender, Recommendation, RecommendedRow,
    ResumeSkillRecommender,
};

/// Resume category predictor
/// Cleans resume text, embeds it with TF-IDF and votes among the nearest
/// training resumes. Also exposes the 0..=5 heuristic rating.
///
/// # Persistence
/// The fitted label encoder, vectorizer and kNN model are written as CBOR
/// and can be loaded back with `TrainedArtifacts::load`.
pub use classifier::{artifacts::TrainedArtifacts, rater::RatingBreakdown, ResumeCategoryPredictor};

/// TF-IDF Vectorizer
/// Fits a vocabulary and smoothed IDF weights once and embeds text as
/// L2-normalized sparse vectors.
///
/// `TFIDFVectorizer<E>` is generic over the weighting engine `E`.
pub use vectorizer::{Analyzer, CountVectorizer, DefaultTFIDFEngine, TFIDFEngine, TFIDFVectorizer};

/// Ranked search hits
pub use vectorizer::evaluate::scoring::Hits;
