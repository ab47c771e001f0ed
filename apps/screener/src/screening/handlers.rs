//! Axum route handlers for the screening page and its JSON counterpart.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{parse_skill_list, parse_threshold};
use crate::errors::AppError;
use crate::screening::pipeline::{screen_batch, UploadedFile};
use crate::screening::profile::{ScreeningProfile, SkillSet};
use crate::screening::result::CandidateResult;
use crate::screening::view::IndexPage;
use crate::state::AppState;

/// Multipart field carrying the resume files.
pub const RESUMES_FIELD: &str = "resumes";
const SKILLS_FIELD: &str = "skills";
const THRESHOLD_FIELD: &str = "threshold";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Everything submitted with one upload form.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub files: Vec<UploadedFile>,
    pub skills: Option<String>,
    pub threshold: Option<String>,
}

impl ScreeningForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ScreeningForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                RESUMES_FIELD => {
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await?;
                    form.files.push(UploadedFile { file_name, bytes });
                }
                SKILLS_FIELD => form.skills = Some(field.text().await?),
                THRESHOLD_FIELD => form.threshold = Some(field.text().await?),
                other => debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// The profile to screen this batch with. Blank override fields fall back
    /// to the server defaults.
    pub fn profile(&self, base: &Arc<ScreeningProfile>) -> Result<Arc<ScreeningProfile>, AppError> {
        let skills = match non_blank(&self.skills) {
            Some(raw) => Some(SkillSet::new(parse_skill_list(raw))?),
            None => None,
        };
        let threshold = match non_blank(&self.threshold) {
            Some(raw) => Some(
                parse_threshold(raw).map_err(|e| AppError::Validation(format!("{e:#}")))?,
            ),
            None => None,
        };

        if skills.is_none() && threshold.is_none() {
            return Ok(Arc::clone(base));
        }
        Ok(Arc::new(base.with_overrides(skills, threshold)))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub results: Vec<CandidateResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Renders the upload form with an empty results table.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage::new(&state.profile, &[]);
    Ok(Html(page.render()?))
}

/// POST /
///
/// Screens every uploaded resume and renders the results table.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let (profile, results) = run_screening(&state, multipart).await?;
    let page = IndexPage::new(&profile, &results);
    Ok(Html(page.render()?))
}

/// POST /api/v1/screen
///
/// Same form contract as `POST /`, answering with JSON instead of HTML.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let (_, results) = run_screening(&state, multipart).await?;
    Ok(Json(ScreenResponse { results }))
}

async fn run_screening(
    state: &AppState,
    multipart: Multipart,
) -> Result<(Arc<ScreeningProfile>, Vec<CandidateResult>), AppError> {
    let form = ScreeningForm::from_multipart(multipart).await?;
    let profile = form.profile(&state.profile)?;

    info!(files = form.files.len(), "Screening upload batch");
    let results = screen_batch(
        &state.uploads,
        Arc::clone(&profile),
        form.files,
        state.config.keep_uploads,
    )
    .await?;

    Ok((profile, results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SKILLS, DEFAULT_THRESHOLD};

    fn base() -> Arc<ScreeningProfile> {
        let skills = SkillSet::new(DEFAULT_SKILLS.iter().copied()).unwrap();
        Arc::new(ScreeningProfile::new(skills, DEFAULT_THRESHOLD).unwrap())
    }

    #[test]
    fn test_blank_overrides_reuse_base_profile() {
        let base = base();
        let form = ScreeningForm {
            skills: Some("   ".to_string()),
            threshold: Some(String::new()),
            ..Default::default()
        };
        let profile = form.profile(&base).unwrap();
        assert!(Arc::ptr_eq(&profile, &base));
    }

    #[test]
    fn test_overrides_are_applied() {
        let form = ScreeningForm {
            skills: Some("Rust, Tokio".to_string()),
            threshold: Some("75".to_string()),
            ..Default::default()
        };
        let profile = form.profile(&base()).unwrap();
        assert_eq!(profile.skills().as_slice(), ["Rust", "Tokio"]);
        assert_eq!(profile.threshold(), 75.0);
    }

    #[test]
    fn test_bad_threshold_is_a_validation_error() {
        let form = ScreeningForm {
            threshold: Some("150".to_string()),
            ..Default::default()
        };
        assert!(matches!(form.profile(&base()), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_separator_only_skills_is_a_validation_error() {
        let form = ScreeningForm {
            skills: Some(" , ,".to_string()),
            ..Default::default()
        };
        assert!(matches!(form.profile(&base()), Err(AppError::Validation(_))));
    }
}
