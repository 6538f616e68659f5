//! Resume category classifier and heuristic rater.

pub mod artifacts;
pub mod clean;
pub mod knn;
pub mod label;
pub mod rater;

use tracing::{info, warn};

use crate::config::ClassifierConfig;
use crate::dataset::Dataset;
use crate::error::{RecommendError, Result};
use crate::vectorizer::{Analyzer, TFIDFVectorizer};

use artifacts::TrainedArtifacts;
use clean::clean_resume;
use knn::KNeighborsClassifier;
use label::LabelEncoder;
use rater::RatingBreakdown;

pub const RESUME_COLUMN: &str = "Resume";
pub const CATEGORY_COLUMN: &str = "Category";

/// Predicts a resume's category with TF-IDF + kNN and rates it heuristically.
/// Trained once at construction, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ResumeCategoryPredictor {
    artifacts: TrainedArtifacts,
}

impl ResumeCategoryPredictor {
    /// Train on the `Resume` / `Category` columns of `dataset`.
    ///
    /// Rows with an empty resume or category are dropped. Fails with
    /// `Data` when no row survives, `ModelFit` when fewer rows than
    /// neighbours remain, and `ArtifactIo`/`Artifact` when persistence
    /// is enabled and writing fails.
    pub fn new(dataset: &Dataset, config: &ClassifierConfig) -> Result<Self> {
        let resume_col = dataset.require_column("resume category", RESUME_COLUMN)?;
        let category_col = dataset.require_column("resume category", CATEGORY_COLUMN)?;

        let mut texts = Vec::with_capacity(dataset.len());
        let mut categories = Vec::with_capacity(dataset.len());
        for row in 0..dataset.len() {
            let text = dataset.cell(row, resume_col);
            let category = dataset.cell(row, category_col);
            if text.trim().is_empty() || category.trim().is_empty() {
                continue;
            }
            texts.push(clean_resume(text));
            categories.push(category);
        }
        let dropped = dataset.len() - texts.len();
        if dropped > 0 {
            warn!(dropped, "dropped training rows with missing resume or category");
        }
        if texts.is_empty() {
            return Err(RecommendError::Data(
                "resume category dataset has no rows with both resume and category".to_string(),
            ));
        }

        let (label_encoder, labels) = LabelEncoder::fit_transform(&categories);
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(Analyzer::english());
        let samples = vectorizer.fit_transform(&texts);
        let model = KNeighborsClassifier::fit(config.neighbors, samples, labels)?;
        info!(
            samples = model.sample_count(),
            categories = label_encoder.len(),
            vocabulary = vectorizer.vocabulary_size(),
            k = model.k(),
            "trained resume category classifier"
        );

        let artifacts = TrainedArtifacts {
            label_encoder,
            vectorizer,
            model,
        };
        if let Some(dir) = &config.artifact_dir {
            artifacts.save(dir)?;
        }
        Ok(Self { artifacts })
    }

    /// Rebuild a predictor from previously saved artifacts
    pub fn from_artifacts(artifacts: TrainedArtifacts) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &TrainedArtifacts {
        &self.artifacts
    }

    /// Category labels seen during training, alphabetical
    pub fn categories(&self) -> &[String] {
        self.artifacts.label_encoder.classes()
    }

    /// Most likely category of `text`; always one of `categories()`
    pub fn predict_category(&self, text: &str) -> String {
        let cleaned = clean_resume(text);
        let vector = self.artifacts.vectorizer.transform(&cleaned);
        let id = self.artifacts.model.predict(&vector);
        self.artifacts
            .label_encoder
            .inverse_transform(id)
            .unwrap_or_default()
            .to_string()
    }

    /// Heuristic 0..=5 rating
    pub fn rate(&self, text: &str) -> u8 {
        self.rate_breakdown(text).rating
    }

    pub fn rate_breakdown(&self, text: &str) -> RatingBreakdown {
        rater::rate_resume(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_set() -> Dataset {
        Dataset::new(
            [CATEGORY_COLUMN, RESUME_COLUMN],
            vec![
                vec!["Data Science", "Python pandas numpy machine learning statistics"],
                vec!["Data Science", "machine learning python deep learning tensorflow"],
                vec!["Data Science", "statistics regression python pandas visualization"],
                vec!["Java Developer", "Java spring hibernate microservices"],
                vec!["Java Developer", "java spring boot rest api maven"],
                vec!["Java Developer", "core java jdbc spring hibernate"],
                vec!["HR", "recruitment onboarding payroll employee relations"],
                vec!["HR", "talent acquisition recruitment interviews payroll"],
                vec!["", "orphan resume without category"],
                vec!["HR", ""],
            ],
        )
    }

    fn predictor() -> ResumeCategoryPredictor {
        ResumeCategoryPredictor::new(&training_set(), &ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn predicts_nearest_category() {
        let p = predictor();
        assert_eq!(p.predict_category("Experienced in Python, pandas and machine learning"), "Data Science");
        assert_eq!(p.predict_category("Spring Boot and Hibernate Java developer"), "Java Developer");
    }

    #[test]
    fn prediction_is_always_a_training_label() {
        let p = predictor();
        for text in ["", "!!!", "completely unrelated words", "payroll", "https://x.y @z #w"] {
            let category = p.predict_category(text);
            assert!(p.categories().contains(&category), "{category} not a training label");
        }
    }

    #[test]
    fn rows_missing_text_or_label_are_dropped() {
        let p = predictor();
        assert_eq!(p.artifacts().model.sample_count(), 8);
        assert_eq!(p.categories(), ["Data Science", "HR", "Java Developer"]);
    }

    #[test]
    fn predicted_label_is_the_raw_category_cell() {
        let rows = [
            "payroll recruitment onboarding",
            "recruitment interviews payroll",
            "employee relations payroll",
            "talent acquisition recruitment",
            "onboarding employee relations",
        ];
        let ds = Dataset::new(
            [CATEGORY_COLUMN, RESUME_COLUMN],
            rows.iter().map(|text| vec![" HR ", *text]).collect::<Vec<_>>(),
        );
        let p = ResumeCategoryPredictor::new(&ds, &ClassifierConfig::default()).unwrap();
        assert_eq!(p.categories(), [" HR "]);
        assert_eq!(p.predict_category("payroll and recruitment"), " HR ");
    }

    #[test]
    fn too_few_samples_fail_at_construction() {
        let ds = Dataset::new(
            [CATEGORY_COLUMN, RESUME_COLUMN],
            vec![vec!["HR", "payroll"], vec!["HR", "recruitment"]],
        );
        let err = ResumeCategoryPredictor::new(&ds, &ClassifierConfig::default()).unwrap_err();
        assert!(matches!(err, RecommendError::ModelFit { samples: 2, k: 5 }));
    }

    #[test]
    fn all_rows_dropped_is_a_data_error() {
        let ds = Dataset::new([CATEGORY_COLUMN, RESUME_COLUMN], vec![vec!["", "text"]]);
        assert!(matches!(
            ResumeCategoryPredictor::new(&ds, &ClassifierConfig::default()),
            Err(RecommendError::Data(_))
        ));
    }

    #[test]
    fn missing_resume_column_is_a_data_error() {
        let ds = Dataset::new([CATEGORY_COLUMN], vec![vec!["HR"]]);
        assert!(matches!(
            ResumeCategoryPredictor::new(&ds, &ClassifierConfig::default()),
            Err(RecommendError::Data(_))
        ));
    }

    #[test]
    fn train_and_predict_share_cleaning() {
        let p = predictor();
        let raw = "Visit http://me.dev #java @hr JAVA, Spring!!! Hibernate 2024";
        assert_eq!(p.predict_category(raw), p.predict_category(&clean_resume(raw)));
    }

    #[test]
    fn artifacts_are_written_and_reload_identically() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClassifierConfig {
            artifact_dir: Some(dir.path().join("models")),
            ..ClassifierConfig::default()
        };
        let trained = ResumeCategoryPredictor::new(&training_set(), &config).unwrap();
        for file in [artifacts::LABEL_ENCODER_FILE, artifacts::VECTORIZER_FILE, artifacts::MODEL_FILE] {
            assert!(dir.path().join("models").join(file).is_file());
        }

        let loaded = ResumeCategoryPredictor::from_artifacts(
            TrainedArtifacts::load(dir.path().join("models")).unwrap(),
        );
        for text in ["python pandas", "spring java", "payroll recruitment", ""] {
            assert_eq!(trained.predict_category(text), loaded.predict_category(text));
        }
    }

    #[test]
    fn unwritable_artifact_dir_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let config = ClassifierConfig {
            artifact_dir: Some(blocker.join("models")),
            ..ClassifierConfig::default()
        };
        assert!(matches!(
            ResumeCategoryPredictor::new(&training_set(), &config),
            Err(RecommendError::ArtifactIo { .. })
        ));
    }

    #[test]
    fn rating_is_independent_of_classifier() {
        let p = predictor();
        assert_eq!(p.rate(""), 0);
        assert_eq!(p.rate("project experience skills"), 2);
    }
}
