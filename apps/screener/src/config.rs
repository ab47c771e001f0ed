use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Skill vocabulary used when `REQUIRED_SKILLS` is not set.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Machine Learning",
    "Data Science",
    "SQL",
    "Flask",
    "HTML",
    "CSS",
    "JavaScript",
];

pub const DEFAULT_THRESHOLD: f64 = 60.0;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub required_skills: Vec<String>,
    pub shortlist_threshold: f64,
    pub max_upload_bytes: usize,
    pub keep_uploads: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let required_skills = match std::env::var("REQUIRED_SKILLS") {
            Ok(raw) => parse_skill_list(&raw),
            Err(_) => DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        };
        if required_skills.is_empty() {
            bail!("REQUIRED_SKILLS must name at least one skill");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            required_skills,
            shortlist_threshold: match std::env::var("SHORTLIST_THRESHOLD") {
                Ok(raw) => parse_threshold(&raw).context("SHORTLIST_THRESHOLD is invalid")?,
                Err(_) => DEFAULT_THRESHOLD,
            },
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            keep_uploads: optional_env("KEEP_UPLOADS", true)?,
        })
    }
}

/// Splits a comma-separated skill list, trimming entries and dropping blanks.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a percentage threshold in the closed range 0..=100.
pub fn parse_threshold(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("'{raw}' is not a number"))?;
    if !(0.0..=100.0).contains(&value) {
        bail!("threshold {value} is outside 0..=100");
    }
    Ok(value)
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_list_trims_and_drops_blanks() {
        let skills = parse_skill_list(" Rust, ,Go ,, Machine Learning ");
        assert_eq!(skills, vec!["Rust", "Go", "Machine Learning"]);
    }

    #[test]
    fn test_parse_skill_list_blank_is_empty() {
        assert!(parse_skill_list("  , ,").is_empty());
    }

    #[test]
    fn test_parse_threshold_accepts_bounds() {
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
        assert_eq!(parse_threshold(" 100 ").unwrap(), 100.0);
        assert_eq!(parse_threshold("62.5").unwrap(), 62.5);
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range_and_garbage() {
        assert!(parse_threshold("100.01").is_err());
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("sixty").is_err());
        assert!(parse_threshold("NaN").is_err());
    }

    #[test]
    fn test_default_vocabulary_has_eight_skills() {
        assert_eq!(DEFAULT_SKILLS.len(), 8);
    }
}
