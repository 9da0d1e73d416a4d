use serde_json::Value;

use crate::corpus::FIELD_DELIMITER;

/// A user profile. Every field is optional; the set of recognized fields
/// is fixed and collapses deterministically into one matching text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub education: Option<String>,
    pub experience_years: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub preferred_industries: Option<Vec<String>>,
    pub summary: Option<String>,
}

impl Profile {
    /// Lenient intake from arbitrary JSON.
    ///
    /// Fields of unexpected shape (a string where a list is expected, a
    /// fractional experience count, a non-object profile) are dropped
    /// rather than rejected, so a sloppy client is still scored on whatever
    /// does parse.
    pub fn from_value(value: &Value) -> Self {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Self::default(),
        };
        Self {
            education: obj.get("education").and_then(Value::as_str).map(str::to_string),
            experience_years: obj.get("experience_years").and_then(Value::as_i64),
            skills: string_list(obj.get("skills")),
            interests: string_list(obj.get("interests")),
            preferred_industries: string_list(obj.get("preferred_industries")),
            summary: obj.get("summary").and_then(Value::as_str).map(str::to_string),
        }
    }

    /// Collapse the profile into one matching text.
    ///
    /// Present fields are appended in a fixed order (education,
    /// "`<N> years experience`", skills, interests, preferred industries,
    /// summary) and joined by the field delimiter. Absent fields are
    /// omitted entirely, so an absent and an empty field produce different
    /// text.
    pub fn to_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(education) = &self.education {
            parts.push(education.clone());
        }
        if let Some(years) = self.experience_years {
            parts.push(format!("{years} years experience"));
        }
        if let Some(skills) = &self.skills {
            parts.push(skills.join(" "));
        }
        if let Some(interests) = &self.interests {
            parts.push(interests.join(" "));
        }
        if let Some(industries) = &self.preferred_industries {
            parts.push(industries.join(" "));
        }
        if let Some(summary) = &self.summary {
            parts.push(summary.clone());
        }
        parts.join(FIELD_DELIMITER)
    }
}

/// Accept only a list whose elements are strings; non-string elements are
/// skipped and any other shape is treated as absent.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_text_appends_fields_in_fixed_order() {
        let profile = Profile {
            education: Some("B.Sc Computer Science".to_string()),
            experience_years: Some(1),
            skills: Some(vec!["python".to_string(), "sql".to_string()]),
            interests: Some(vec!["data science".to_string()]),
            preferred_industries: Some(vec!["education".to_string()]),
            summary: Some("aspiring analyst".to_string()),
        };
        assert_eq!(
            profile.to_text(),
            "B.Sc Computer Science . 1 years experience . python sql . data science . education . aspiring analyst"
        );
    }

    #[test]
    fn to_text_omits_absent_fields() {
        let profile = Profile {
            skills: Some(vec!["python".to_string()]),
            summary: Some("analyst".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.to_text(), "python . analyst");
        assert_eq!(Profile::default().to_text(), "");
    }

    #[test]
    fn absent_and_empty_fields_differ() {
        let absent = Profile::default();
        let empty = Profile {
            skills: Some(Vec::new()),
            ..Profile::default()
        };
        assert_ne!(absent.to_text(), empty.to_text());
    }

    #[test]
    fn from_value_reads_well_formed_fields() {
        let profile = Profile::from_value(&json!({
            "education": "B.Sc",
            "experience_years": 2,
            "skills": ["python", "sql"],
            "interests": ["data science"],
        }));
        assert_eq!(profile.education.as_deref(), Some("B.Sc"));
        assert_eq!(profile.experience_years, Some(2));
        assert_eq!(profile.skills, Some(vec!["python".to_string(), "sql".to_string()]));
        assert!(profile.preferred_industries.is_none());
    }

    #[test]
    fn from_value_drops_misshapen_fields() {
        let profile = Profile::from_value(&json!({
            "education": 42,
            "experience_years": "two",
            "skills": "python",
            "interests": ["data science", 7],
        }));
        assert!(profile.education.is_none());
        assert!(profile.experience_years.is_none());
        assert!(profile.skills.is_none());
        // non-string elements are skipped, not fatal
        assert_eq!(profile.interests, Some(vec!["data science".to_string()]));
    }

    #[test]
    fn from_value_of_non_object_is_empty() {
        assert_eq!(Profile::from_value(&json!("nope")), Profile::default());
        assert_eq!(Profile::from_value(&json!(null)), Profile::default());
    }
}
