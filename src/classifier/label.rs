use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Bijection between category names and dense integer ids.
/// Ids follow the alphabetical order of the names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learn the distinct labels and encode `labels` in one go
    pub fn fit_transform<S: AsRef<str>>(labels: &[S]) -> (Self, Vec<usize>) {
        let classes: Vec<String> = labels
            .iter()
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let encoder = LabelEncoder { classes };
        let encoded = labels
            .iter()
            .filter_map(|l| encoder.transform(l.as_ref()))
            .collect();
        (encoder, encoded)
    }

    /// Id of a label seen during fitting
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    /// Label of an id
    pub fn inverse_transform(&self, id: usize) -> Option<&str> {
        self.classes.get(id).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_alphabetical_and_round_trip() {
        let (enc, ids) = LabelEncoder::fit_transform(&["Java Developer", "Data Science", "Java Developer"]);
        assert_eq!(enc.classes(), ["Data Science", "Java Developer"]);
        assert_eq!(ids, vec![1, 0, 1]);
        for (id, class) in enc.classes().iter().enumerate() {
            assert_eq!(enc.transform(class), Some(id));
            assert_eq!(enc.inverse_transform(id), Some(class.as_str()));
        }
        assert_eq!(enc.transform("HR"), None);
    }
}
