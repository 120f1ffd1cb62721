//! Optional studio logbook: a spreadsheet-like sink that receives one
//! appended row per submission.
//!
//! The sink is configured from `studio.toml` next to the app. Missing or
//! invalid configuration is a user-facing setup problem, never a crash; a
//! failed append is reported with the underlying message and not retried
//! (each submission is a single atomic append attempt).

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::format;

pub const CONFIG_PATH: &str = "studio.toml";

const SETUP_HINT: &str = "create it next to the app with:\n\
    endpoint = \"https://example.com/logbook/append\"\n\
    token = \"<shared secret>\"\n\
    spreadsheet = \"<sheet id>\"";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SinkConfig {
    pub endpoint: String,
    pub token: String,
    pub spreadsheet: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("logbook config `{path}` not found — {SETUP_HINT}")]
    Missing { path: String },
    #[error("failed to read logbook config: {0}")]
    Read(#[from] io::Error),
    #[error("invalid logbook config format: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid logbook config value: {0}")]
    Validation(String),
}

impl SinkConfig {
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(Path::new(CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing {
                    path: path.display().to_string(),
                })
            }
            Err(err) => return Err(ConfigError::Read(err)),
        };
        let config: SinkConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(
                "endpoint must be an http(s) URL".to_string(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::Validation("token cannot be empty".to_string()));
        }
        if self.spreadsheet.trim().is_empty() {
            return Err(ConfigError::Validation(
                "spreadsheet cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One logbook row with the fixed column schema. Column order is part of the
/// sheet contract; `COLUMNS` and `values` must stay aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRow {
    pub submitted_at: String,
    pub lesson: String,
    pub title: String,
    pub chart_kinds: String,
    pub reasons: String,
    pub notes: String,
    pub upload_name: String,
    pub id: String,
}

impl SubmissionRow {
    pub const COLUMNS: [&'static str; 8] = [
        "submitted_at",
        "lesson",
        "title",
        "chart_kinds",
        "reasons",
        "notes",
        "upload_name",
        "id",
    ];

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        submitted_at: OffsetDateTime,
        lesson: &str,
        title: &str,
        chart_kinds: &str,
        reasons: &str,
        notes: &str,
        upload_name: &str,
    ) -> Self {
        Self {
            submitted_at: format::rfc3339(submitted_at),
            lesson: lesson.to_string(),
            title: title.to_string(),
            chart_kinds: chart_kinds.to_string(),
            reasons: reasons.to_string(),
            notes: notes.to_string(),
            upload_name: upload_name.to_string(),
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn values(&self) -> [String; 8] {
        [
            self.submitted_at.clone(),
            self.lesson.clone(),
            self.title.clone(),
            self.chart_kinds.clone(),
            self.reasons.clone(),
            self.notes.clone(),
            self.upload_name.clone(),
            self.id.clone(),
        ]
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("logbook request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("logbook append rejected with HTTP status {0}")]
    Status(u16),
}

/// Append one row. One POST, no retry; the caller surfaces any error inline.
pub fn append(config: &SinkConfig, row: &SubmissionRow) -> Result<(), SinkError> {
    let payload = serde_json::json!({
        "token": config.token,
        "spreadsheet": config.spreadsheet,
        "columns": SubmissionRow::COLUMNS,
        "row": row.values(),
    });

    let client = reqwest::blocking::Client::new();
    let response = client.post(&config.endpoint).json(&payload).send()?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "logbook append rejected");
        return Err(SinkError::Status(status.as_u16()));
    }

    tracing::info!(lesson = %row.lesson, "logbook row appended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_row() -> SubmissionRow {
        SubmissionRow::new(
            datetime!(2026-08-07 09:05:03 UTC),
            "plating",
            "급식의 제왕",
            "Bar chart",
            "ranking needs length comparison",
            "돈까스 압승",
            "dish.png",
        )
    }

    #[test]
    fn columns_and_values_stay_aligned() {
        let row = sample_row();
        let values = row.values();
        assert_eq!(values.len(), SubmissionRow::COLUMNS.len());
        assert_eq!(SubmissionRow::COLUMNS[0], "submitted_at");
        assert_eq!(values[0], "2026-08-07T09:05:03Z");
        assert_eq!(values[1], "plating");
        assert_eq!(values[6], "dish.png");
        assert_eq!(values[7], row.id);
    }

    #[test]
    fn each_row_gets_a_fresh_id() {
        assert_ne!(sample_row().id, sample_row().id);
    }

    #[test]
    fn config_parses_and_validates() {
        let config: SinkConfig = toml::from_str(
            r#"
            endpoint = "https://example.com/logbook"
            token = "secret"
            spreadsheet = "sheet-1"
            "#,
        )
        .expect("parses");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let config = SinkConfig {
            endpoint: "ftp://example.com".into(),
            token: "secret".into(),
            spreadsheet: "sheet-1".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn blank_token_is_rejected() {
        let config = SinkConfig {
            endpoint: "https://example.com".into(),
            token: "  ".into(),
            spreadsheet: "sheet-1".into(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_carries_setup_instructions() {
        let err = SinkConfig::load(Path::new("/definitely/not/here/studio.toml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("endpoint"));
        assert!(message.contains("token"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir().join("datachef-sink-config-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("studio.toml");
        fs::write(&path, "endpoint = [not toml").expect("write");

        assert!(matches!(
            SinkConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
