//! Translatable record model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique record identifier (the scanner's plugin id)
pub type RecordId = u64;

/// Names the textual attribute of a record that a request/response pair
/// populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    /// Vulnerability name
    Name,
    /// Vulnerability description
    Description,
    /// Remediation / solution text
    Solution,
}

impl FieldTag {
    /// All translatable fields of a record
    pub const ALL: [FieldTag; 3] = [FieldTag::Name, FieldTag::Description, FieldTag::Solution];
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTag::Name => write!(f, "name"),
            FieldTag::Description => write!(f, "description"),
            FieldTag::Solution => write!(f, "solution"),
        }
    }
}

/// One translatable entry in the record store
///
/// Holds source-language fields and their translated counterparts. After a
/// fully successful run, every non-empty source field has a non-empty
/// translated counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique record id
    pub id: RecordId,
    /// Source-language text, keyed by field
    #[serde(default)]
    pub source: HashMap<FieldTag, String>,
    /// Target-language text, keyed by field
    #[serde(default)]
    pub translated: HashMap<FieldTag, String>,
}

impl Record {
    /// Create a record with no fields
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            source: HashMap::new(),
            translated: HashMap::new(),
        }
    }

    /// Set a source-language field
    pub fn with_source(mut self, field: FieldTag, text: impl Into<String>) -> Self {
        self.source.insert(field, text.into());
        self
    }

    /// Write a translated field, overwriting any prior value
    pub fn set_translation(&mut self, field: FieldTag, text: impl Into<String>) {
        self.translated.insert(field, text.into());
    }

    /// Fields that have source content but no (or empty) translated
    /// counterpart
    pub fn missing_translations(&self) -> Vec<FieldTag> {
        FieldTag::ALL
            .into_iter()
            .filter(|field| {
                let has_source = self.source.get(field).is_some_and(|s| !s.is_empty());
                let has_translation = self
                    .translated
                    .get(field)
                    .is_some_and(|t| !t.is_empty());
                has_source && !has_translation
            })
            .collect()
    }

    /// Whether every non-empty source field has a translated counterpart
    pub fn is_fully_translated(&self) -> bool {
        self.missing_translations().is_empty()
    }
}
