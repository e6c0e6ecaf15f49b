//! Structured record types produced by a parse. These are the interface read
//! by the downstream scoring and job-matching services — field names are part
//! of the JSON contract.

use serde::{Deserialize, Serialize};

/// Sentinel used when no candidate name could be detected on the first line.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Everything extracted from one resume.
///
/// Contact fields are `None` when not found (never `Some("")`). `skills` and
/// `languages` are sorted and deduplicated; entry lists are in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    /// Input text truncated to a fixed prefix for downstream consumers.
    pub raw_text: String,
}

/// One education entry. Committed only if `degree` or `institution` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
    pub score: Option<String>,
}

impl EducationEntry {
    /// An entry is worth keeping once it names a degree or an institution.
    pub fn is_valid(&self) -> bool {
        self.degree.is_some() || self.institution.is_some()
    }
}

/// One work/internship entry. A draft is opened by a date line; later lines
/// fill `title`, then `company`, then accumulate into `description`
/// (space-joined).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn from_duration(duration: &str) -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            duration: duration.to_string(),
            description: String::new(),
        }
    }
}

/// One project entry. Committed only if `name` or `description` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub technologies: String,
    pub description: String,
}

impl ProjectEntry {
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() || !self.description.is_empty()
    }

    /// Appends a line to the description, space-joined.
    pub fn push_description(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_entry_needs_degree_or_institution() {
        let empty = EducationEntry::default();
        assert!(!empty.is_valid());

        let with_degree = EducationEntry {
            degree: Some("Bachelor of Technology".to_string()),
            ..Default::default()
        };
        assert!(with_degree.is_valid());

        let with_institution = EducationEntry {
            institution: Some("STATE UNIVERSITY".to_string()),
            ..Default::default()
        };
        assert!(with_institution.is_valid());
    }

    #[test]
    fn test_project_entry_needs_name_or_description() {
        let empty = ProjectEntry::default();
        assert!(!empty.is_valid());

        let named = ProjectEntry {
            name: "Inventory Tracker".to_string(),
            ..Default::default()
        };
        assert!(named.is_valid());
    }

    #[test]
    fn test_project_description_space_joined() {
        let mut p = ProjectEntry::default();
        p.push_description("Built a CRUD app.");
        p.push_description("Deployed on Heroku.");
        assert_eq!(p.description, "Built a CRUD app. Deployed on Heroku.");
    }

    #[test]
    fn test_experience_draft_starts_with_duration_only() {
        let e = ExperienceEntry::from_duration("June 2022 - Present");
        assert_eq!(e.duration, "June 2022 - Present");
        assert!(e.title.is_empty());
        assert!(e.company.is_empty());
        assert!(e.description.is_empty());
    }
}
