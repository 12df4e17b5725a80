//! Request-boundary records for resume generation.
//!
//! These are plain values handed over by the data service per request. The
//! pipeline never mutates or persists them. Missing optional fields default
//! silently — a sparse payload is valid input, never a validation error.

use serde::{Deserialize, Serialize};

/// One description bullet. The data layer sends these either as bare strings
/// or as one-field `{"content": ...}` objects; both normalize to text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Record { content: String },
}

impl Description {
    pub fn content(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Record { content } => content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    /// Phone number. Wire name is `number`, matching the data service.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Carried through but not typeset by the current template.
    #[serde(default)]
    pub gpa: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organisation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    /// Selects whether this record appears in the generated document.
    /// Excluded records stay in the caller's store untouched.
    #[serde(default)]
    pub included: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tools: String,
    /// Hyperlink target — embedded raw, never escaped as prose.
    #[serde(default)]
    pub source_code: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub included: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(default)]
    pub content: String,
}

/// The single structured payload accepted by the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeContent {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_accepts_both_forms() {
        let bare: Description = serde_json::from_value(json!("Built X")).unwrap();
        let record: Description = serde_json::from_value(json!({"content": "Built X"})).unwrap();
        assert_eq!(bare.content(), "Built X");
        assert_eq!(record.content(), "Built X");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let experience: ExperienceRecord =
            serde_json::from_value(json!({"title": "Engineer"})).unwrap();
        assert_eq!(experience.title, "Engineer");
        assert_eq!(experience.organisation, "");
        assert_eq!(experience.location, "");
        assert!(experience.descriptions.is_empty());
        assert!(!experience.included);
    }

    #[test]
    fn test_sparse_payload_deserializes() {
        let content: ResumeContent = serde_json::from_value(json!({
            "personal_info": {"name": "Ada", "email": "ada@example.com"}
        }))
        .unwrap();
        assert_eq!(content.personal_info.number, "");
        assert!(content.personal_info.portfolio.is_none());
        assert!(content.experiences.is_empty());
        assert!(content.skills.is_empty());
    }
}
