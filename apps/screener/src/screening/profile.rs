use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::ExtractionOutcome;
use crate::screening::fields::FieldExtractor;
use crate::screening::result::{CandidateResult, ExtractionStatus};
use crate::screening::scorer::Scorer;

/// Ordered, non-empty skill vocabulary. Matching against it is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skills: Vec<String> = skills
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if skills.is_empty() {
            return Err(AppError::Validation(
                "skill vocabulary must contain at least one skill".to_string(),
            ));
        }
        Ok(Self(skills))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything needed to turn resume text into a verdict: the vocabulary,
/// the email pattern, and the shortlisting threshold.
#[derive(Debug, Clone)]
pub struct ScreeningProfile {
    fields: FieldExtractor,
    scorer: Scorer,
}

impl ScreeningProfile {
    pub fn new(skills: SkillSet, threshold: f64) -> Result<Self> {
        Ok(Self {
            fields: FieldExtractor::new(skills.clone())?,
            scorer: Scorer::new(skills, threshold),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let skills = SkillSet::new(config.required_skills.iter().cloned())?;
        Self::new(skills, config.shortlist_threshold)
    }

    /// A copy of this profile with the vocabulary and/or threshold replaced,
    /// e.g. for a single request screening against a different job description.
    pub fn with_overrides(&self, skills: Option<SkillSet>, threshold: Option<f64>) -> Self {
        let skills = skills.unwrap_or_else(|| self.scorer.skills().clone());
        let threshold = threshold.unwrap_or_else(|| self.scorer.threshold());
        Self {
            fields: self.fields.with_skills(skills.clone()),
            scorer: Scorer::new(skills, threshold),
        }
    }

    pub fn skills(&self) -> &SkillSet {
        self.scorer.skills()
    }

    pub fn threshold(&self) -> f64 {
        self.scorer.threshold()
    }

    /// Runs field extraction and scoring over one document's text.
    pub fn screen(&self, name: String, outcome: &ExtractionOutcome) -> CandidateResult {
        let text = outcome.text();
        let skills = self.fields.extract_skills(text);
        let score = self.scorer.score(&skills);

        CandidateResult {
            name,
            email: self.fields.extract_email(text),
            status: self.scorer.status(score),
            score,
            skills,
            extraction: ExtractionStatus::from(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SKILLS, DEFAULT_THRESHOLD};
    use crate::screening::fields::EMAIL_NOT_FOUND;
    use crate::screening::result::Status;

    fn default_profile() -> ScreeningProfile {
        let skills = SkillSet::new(DEFAULT_SKILLS.iter().copied()).unwrap();
        ScreeningProfile::new(skills, DEFAULT_THRESHOLD).unwrap()
    }

    #[test]
    fn test_skill_set_rejects_empty() {
        assert!(SkillSet::new(Vec::<String>::new()).is_err());
        assert!(SkillSet::new(["  ", ""]).is_err());
    }

    #[test]
    fn test_skill_set_trims_and_keeps_order() {
        let set = SkillSet::new([" SQL ", "Python", ""]).unwrap();
        assert_eq!(set.as_slice(), ["SQL", "Python"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_three_of_eight_skills_is_rejected() {
        let outcome = ExtractionOutcome::Extracted("Python, SQL, HTML".to_string());
        let result = default_profile().screen("alice".to_string(), &outcome);

        assert_eq!(result.skills, vec!["Python", "SQL", "HTML"]);
        assert_eq!(result.email, EMAIL_NOT_FOUND);
        assert_eq!(result.score_display(), "37.5%");
        assert_eq!(result.status, Status::Rejected);
        assert_eq!(result.extraction, ExtractionStatus::Extracted);
    }

    #[test]
    fn test_unsupported_document_scores_zero() {
        let result = default_profile().screen("notes".to_string(), &ExtractionOutcome::Unsupported);
        assert_eq!(result.skills_display(), "None Found");
        assert_eq!(result.score_display(), "0.0%");
        assert_eq!(result.status, Status::Rejected);
        assert_eq!(result.extraction, ExtractionStatus::Unsupported);
    }

    #[test]
    fn test_failed_extraction_is_distinguishable() {
        let outcome = ExtractionOutcome::Failed {
            reason: "bad xref".to_string(),
        };
        let result = default_profile().screen("broken".to_string(), &outcome);
        assert_eq!(result.status, Status::Rejected);
        assert_eq!(
            result.extraction,
            ExtractionStatus::Failed {
                reason: "bad xref".to_string()
            }
        );
    }

    #[test]
    fn test_screening_is_idempotent() {
        let profile = default_profile();
        let outcome = ExtractionOutcome::Extracted("bob@corp.io Flask CSS".to_string());
        let first = profile.screen("bob".to_string(), &outcome);
        let second = profile.screen("bob".to_string(), &outcome);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overrides_replace_vocabulary_and_threshold() {
        let profile = default_profile().with_overrides(
            Some(SkillSet::new(["Rust", "Go"]).unwrap()),
            Some(50.0),
        );
        let outcome = ExtractionOutcome::Extracted("I write rust daily".to_string());
        let result = profile.screen("carol".to_string(), &outcome);

        assert_eq!(result.skills, vec!["Rust"]);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.status, Status::Shortlisted);
    }

    #[test]
    fn test_overrides_keep_unspecified_values() {
        let profile = default_profile().with_overrides(None, Some(10.0));
        assert_eq!(profile.skills().len(), 8);
        assert_eq!(profile.threshold(), 10.0);
    }
}
