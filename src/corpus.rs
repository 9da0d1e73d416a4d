use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Delimiter between the textual fields that are concatenated into one
/// matching text.
pub(crate) const FIELD_DELIMITER: &str = " . ";

/// Attribute names every record carries regardless of its extra mappings.
const SCHEMA_FIELDS: &[&str] = &["id", "title", "description", "skills", "industry", "level"];

/// One job posting as supplied by the embedding application.
///
/// Missing textual fields deserialize as empty defaults rather than errors.
/// Attributes outside the fixed schema are retained and stay addressable by
/// structured filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub level: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    /// Canonical text used for content matching: title, description and the
    /// space-joined skill list, joined by the field delimiter.
    pub fn matching_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.description.len() + 32);
        text.push_str(&self.title);
        text.push_str(FIELD_DELIMITER);
        text.push_str(&self.description);
        text.push_str(FIELD_DELIMITER);
        for (i, skill) in self.skills.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(skill);
        }
        text
    }

    /// Look up a filterable attribute by name.
    ///
    /// Fixed schema fields come first; any other name falls back to the
    /// record's extra attributes.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::String(self.id.clone())),
            "title" => Some(Value::String(self.title.clone())),
            "description" => Some(Value::String(self.description.clone())),
            "skills" => Some(Value::Array(
                self.skills.iter().cloned().map(Value::String).collect(),
            )),
            "industry" => Some(Value::String(self.industry.clone())),
            "level" => Some(Value::String(self.level.clone())),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// An immutable, ordered collection of job records plus the matching text
/// derived from each one.
///
/// Record order is significant: it is the index space the weighting model
/// is built over and the tie-break order for equal-score ranking. A corpus
/// is replaced wholesale on update, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<JobRecord>,
    matching_texts: Vec<String>,
}

impl Corpus {
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        let matching_texts = records.iter().map(JobRecord::matching_text).collect();
        Self {
            records,
            matching_texts,
        }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Matching texts, index-aligned with `records`.
    pub fn matching_texts(&self) -> &[String] {
        &self.matching_texts
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the attribute exists in the corpus schema: either a fixed
    /// field or an extra attribute carried by at least one record.
    pub(crate) fn has_attribute(&self, key: &str) -> bool {
        SCHEMA_FIELDS.contains(&key) || self.records.iter().any(|r| r.extra.contains_key(key))
    }
}
