// ABOUTME: Categorical label encoding for model inputs and outputs
// ABOUTME: Fixed per-field vocabularies mapping labels to integer codes and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Categorical Encoder
//!
//! Each categorical field owns an ordered vocabulary established when the
//! model was trained. A label's code is its index in that vocabulary.
//! Vocabularies are immutable once loaded.

use crate::errors::RecommendationError;
use crate::models::CategoricalField;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Problems with vocabulary artifacts, detected at load time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// A field has no vocabulary in the artifact
    #[error("missing vocabulary for {0}")]
    Missing(CategoricalField),
    /// A vocabulary has no labels
    #[error("vocabulary for {0} is empty")]
    Empty(CategoricalField),
    /// A label appears more than once
    #[error("vocabulary for {field} lists '{label}' more than once")]
    DuplicateLabel {
        /// Field whose vocabulary is broken
        field: CategoricalField,
        /// Repeated label
        label: String,
    },
}

/// Ordered list of known labels for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelVocabulary {
    classes: Vec<String>,
}

impl LabelVocabulary {
    /// Build a vocabulary from labels in code order
    #[must_use]
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Labels in code order
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no labels are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Code of `label`, if known
    #[must_use]
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|class| class == label)
    }

    /// Label of `code`, if in range
    #[must_use]
    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    fn check(&self, field: CategoricalField) -> Result<(), VocabularyError> {
        if self.classes.is_empty() {
            return Err(VocabularyError::Empty(field));
        }
        let mut seen = HashSet::with_capacity(self.classes.len());
        for label in &self.classes {
            if !seen.insert(label.as_str()) {
                return Err(VocabularyError::DuplicateLabel {
                    field,
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Encoder holding one vocabulary per categorical field
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    vocabularies: BTreeMap<CategoricalField, LabelVocabulary>,
}

impl CategoricalEncoder {
    /// Build an encoder, requiring a valid vocabulary for every field
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError` if a field is missing, empty, or lists a label twice
    pub fn new(
        vocabularies: BTreeMap<CategoricalField, LabelVocabulary>,
    ) -> Result<Self, VocabularyError> {
        for field in CategoricalField::ALL {
            vocabularies
                .get(&field)
                .ok_or(VocabularyError::Missing(field))?
                .check(field)?;
        }
        Ok(Self { vocabularies })
    }

    /// Vocabulary of `field`
    #[must_use]
    pub fn vocabulary(&self, field: CategoricalField) -> &LabelVocabulary {
        // Every field is checked present in `new`
        &self.vocabularies[&field]
    }

    /// Number of labels known for `field`
    #[must_use]
    pub fn vocabulary_size(&self, field: CategoricalField) -> usize {
        self.vocabulary(field).len()
    }

    /// Encode a label
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::UnknownCategory` if `value` is not in the vocabulary
    pub fn encode(&self, field: CategoricalField, value: &str) -> Result<usize, RecommendationError> {
        self.vocabulary(field)
            .transform(value)
            .ok_or_else(|| RecommendationError::UnknownCategory {
                field,
                value: value.to_owned(),
            })
    }

    /// Decode a code
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError::InvalidCode` if `code` is outside `[0, vocabulary_size)`
    pub fn decode(&self, field: CategoricalField, code: i64) -> Result<&str, RecommendationError> {
        let vocabulary = self.vocabulary(field);
        usize::try_from(code)
            .ok()
            .and_then(|index| vocabulary.inverse_transform(index))
            .ok_or(RecommendationError::InvalidCode {
                field,
                code,
                vocabulary_size: vocabulary.len(),
            })
    }
}
