use askama::Template;

use crate::screening::profile::ScreeningProfile;
use crate::screening::result::CandidateResult;
use crate::screening::scorer::format_score;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub vocabulary: String,
    pub threshold: String,
    pub results: &'a [CandidateResult],
}

impl<'a> IndexPage<'a> {
    pub fn new(profile: &ScreeningProfile, results: &'a [CandidateResult]) -> Self {
        Self {
            vocabulary: profile.skills().as_slice().join(", "),
            threshold: format_score(profile.threshold()),
            results,
        }
    }
}
