use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::classifier::{knn::KNeighborsClassifier, label::LabelEncoder};
use crate::error::{RecommendError, Result};
use crate::vectorizer::TFIDFVectorizer;

pub const LABEL_ENCODER_FILE: &str = "label_encoder.cbor";
pub const VECTORIZER_FILE: &str = "vectorizer.cbor";
pub const MODEL_FILE: &str = "knn_model.cbor";

/// Everything a trained category classifier consists of
#[derive(Debug, Clone)]
pub struct TrainedArtifacts {
    pub label_encoder: LabelEncoder,
    pub vectorizer: TFIDFVectorizer,
    pub model: KNeighborsClassifier,
}

impl TrainedArtifacts {
    /// Write the three artifacts as CBOR into `dir`, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| RecommendError::ArtifactIo {
            path: dir.to_path_buf(),
            source,
        })?;
        write_cbor(&dir.join(LABEL_ENCODER_FILE), &self.label_encoder)?;
        write_cbor(&dir.join(VECTORIZER_FILE), &self.vectorizer)?;
        write_cbor(&dir.join(MODEL_FILE), &self.model)?;
        info!(dir = %dir.display(), "saved classifier artifacts");
        Ok(())
    }

    /// Read artifacts written by `save`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            label_encoder: read_cbor(&dir.join(LABEL_ENCODER_FILE))?,
            vectorizer: read_cbor(&dir.join(VECTORIZER_FILE))?,
            model: read_cbor(&dir.join(MODEL_FILE))?,
        })
    }
}

fn write_cbor<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_cbor::to_vec(value)?;
    fs::write(path, bytes).map_err(|source| RecommendError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })
}

fn read_cbor<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|source| RecommendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_cbor::from_slice(&bytes)?)
}
