use regex::Regex;

use crate::screening::profile::SkillSet;

pub const EMAIL_NOT_FOUND: &str = "Email Not Found";

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Pulls the contact email and the vocabulary skills out of resume text.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    email_pattern: Regex,
    skills: SkillSet,
}

impl FieldExtractor {
    pub fn new(skills: SkillSet) -> Result<Self, regex::Error> {
        Ok(Self {
            email_pattern: Regex::new(EMAIL_PATTERN)?,
            skills,
        })
    }

    /// Same compiled email pattern, different vocabulary.
    pub fn with_skills(&self, skills: SkillSet) -> Self {
        Self {
            email_pattern: self.email_pattern.clone(),
            skills,
        }
    }

    /// First email in document order, or `EMAIL_NOT_FOUND`.
    pub fn extract_email(&self, text: &str) -> String {
        self.email_pattern
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
    }

    /// Vocabulary entries contained in `text`, in vocabulary order.
    ///
    /// Plain substring containment: "Java" would also match inside "JavaScript".
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        self.skills
            .as_slice()
            .iter()
            .filter(|skill| text_lower.contains(&skill.to_lowercase()))
            .cloned()
            .collect()
    }
}
