use crate::screening::profile::SkillSet;
use crate::screening::result::Status;

/// Percentage-of-vocabulary scorer with an inclusive shortlisting threshold.
#[derive(Debug, Clone)]
pub struct Scorer {
    skills: SkillSet,
    threshold: f64,
}

impl Scorer {
    pub fn new(skills: SkillSet, threshold: f64) -> Self {
        Self { skills, threshold }
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Share of the vocabulary present in `matched`, as a percentage rounded
    /// to two decimals. Entries outside the vocabulary and duplicates are ignored.
    pub fn score(&self, matched: &[String]) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        let hits = self
            .skills
            .as_slice()
            .iter()
            .filter(|skill| matched.contains(*skill))
            .count();
        round_2dp(hits as f64 / self.skills.len() as f64 * 100.0)
    }

    pub fn status(&self, score: f64) -> Status {
        if score >= self.threshold {
            Status::Shortlisted
        } else {
            Status::Rejected
        }
    }
}

/// Two-decimal rounding with ties going to the even digit.
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Renders a score the way the results table shows it: two-decimal value,
/// trailing zeros trimmed down to one fractional digit (`37.5%`, `0.0%`, `66.67%`).
pub fn format_score(score: f64) -> String {
    let fixed = format!("{score:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0%")
    } else {
        format!("{trimmed}%")
    }
}
