use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::summary::GenerationError;

/// Host-level error type.
///
/// Each variant maps to a stable code and exactly one user-facing message;
/// internal detail goes to the log, never to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Startup configuration failures are user-fixable, so the cause is shown.
    pub fn configuration(err: anyhow::Error) -> Self {
        AppError::InvalidInput(format!("Configuration error: {err:#}"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Export(_) => "EXPORT_ERROR",
            AppError::Generation(GenerationError::MissingCredential) => "MISSING_CREDENTIAL",
            AppError::Generation(GenerationError::AlreadyGenerating(_)) => "ALREADY_GENERATING",
            AppError::Generation(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(messages) => messages.join("\n"),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                e.user_message().to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                e.user_message().to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        }
    }

    /// `{"error": {"code", "message"}}` envelope for machine-readable output.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_export_error_hides_detail() {
        let err = AppError::from(ExportError::Rasterize("surface lost at 0x1f".into()));
        assert_eq!(err.code(), "EXPORT_ERROR");
        assert_eq!(err.user_message(), "Failed to generate PDF. Please try again.");
    }

    #[test]
    fn test_generation_codes() {
        assert_eq!(
            AppError::from(GenerationError::MissingCredential).code(),
            "MISSING_CREDENTIAL"
        );
        let api = GenerationError::Completion(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".into(),
        });
        let err = AppError::from(api);
        assert_eq!(err.code(), "LLM_ERROR");
        assert!(!err.user_message().contains("x-api-key"));
    }

    #[test]
    fn test_validation_lists_every_message() {
        let err = AppError::Validation(vec!["Name is required".into(), "Email is required".into()]);
        let body = err.to_json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Name is required\nEmail is required");
    }

    #[test]
    fn test_configuration_error_uses_envelope() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let err = crate::config::Config::from_lookup(|key| {
            (key == "RESUME_OUTPUT_DIR").then(|| path.clone())
        })
        .unwrap_err();

        let body = AppError::configuration(err).to_json();
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Configuration error: RESUME_OUTPUT_DIR"));
    }

    #[test]
    fn test_internal_error_is_generic() {
        let err = AppError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
