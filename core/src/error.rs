//! Error types for the NEWMECLASS client.
//!
//! Every failure a page can hit falls into one of these families:
//!
//! - [`ApiError`] - network and backend failures
//! - [`ValidationError`] - local input checks that block a request
//! - [`WizardError`] - personality test wizard transitions
//! - [`EditorError`] - admin team list editor writes
//! - [`UploadError`] - payment proof uploads
//! - [`ConfigError`] - configuration loading
//! - [`ClientError`] - umbrella type used by the CLI
//!
//! Conversion is automatic via `From` implementations so `?` works
//! across boundaries. None of these are fatal: every page returns to an
//! interactive state after reporting one.

use thiserror::Error;

// =============================================================================
// Backend Errors
// =============================================================================

/// Failures talking to the backend API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, CORS, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    ///
    /// `detail` carries the FastAPI `{"detail": "..."}` body when present.
    #[error("Server error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// Body could not be decoded into the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// An authenticated endpoint was called without a token.
    #[error("Not logged in")]
    Unauthorized,
}

impl ApiError {
    /// Message suitable for a toast: the backend's `detail` when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Missing token, or one the backend refused.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Status { status: 401, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Local checks that run before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Required field left empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email does not look like an address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Some free questions have no answer yet.
    #[error("{0} question(s) still unanswered")]
    UnansweredQuestions(usize),

    /// Selected option index does not exist on the question.
    #[error("Option {option} is out of range for question {question_id}")]
    InvalidOption { question_id: String, option: usize },

    /// Upload media type is not on the allow-list.
    #[error("File type not allowed: {0}")]
    FileType(String),

    /// Upload exceeds the size ceiling.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// Upload submitted without a file.
    #[error("No file selected")]
    NoFile,

    /// Payment proof submitted without a payment method.
    #[error("No payment method selected")]
    NoPaymentMethod,
}

impl ValidationError {
    /// Indonesian message shown inline or in a toast.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingField(_) => "Mohon isi semua field yang wajib".to_string(),
            ValidationError::InvalidEmail(_) => "Format email tidak valid".to_string(),
            ValidationError::UnansweredQuestions(_) => {
                "Mohon jawab semua pertanyaan yang tersedia".to_string()
            }
            ValidationError::InvalidOption { .. } => "Pilihan jawaban tidak valid".to_string(),
            ValidationError::FileType(_) => {
                "Hanya file JPG, JPEG, atau PNG yang diperbolehkan".to_string()
            }
            ValidationError::FileTooLarge { .. } => "Ukuran file maksimal 5MB".to_string(),
            ValidationError::NoFile => "Pilih file bukti pembayaran".to_string(),
            ValidationError::NoPaymentMethod => "Pilih metode pembayaran".to_string(),
        }
    }
}

// =============================================================================
// Wizard Errors
// =============================================================================

/// Rejected transitions of the personality test wizard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// Local precondition failed; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend call failed; the wizard went back to where it was.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// Operation not valid in the current state (e.g. submit while submitting).
    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Why an upload did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Backend answered `success: false`.
    #[error("Upload rejected: {0}")]
    Rejected(String),
}

impl UploadError {
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Validation(e) => e.user_message(),
            UploadError::Api(e) => e.user_message("Gagal mengupload bukti pembayaran"),
            UploadError::Rejected(message) => message.clone(),
        }
    }
}

// =============================================================================
// Editor Errors
// =============================================================================

/// Failures of the admin team list editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Name or position left empty.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend call failed.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// No entry with this id in the active list.
    #[error("Entry not found: {0}")]
    UnknownEntry(uuid::Uuid),

    /// The list changed on the server since it was loaded.
    #[error("'{field}' was modified by another session; reloaded")]
    Conflict { field: &'static str },

    /// Settings have not been loaded yet.
    #[error("Settings not loaded")]
    NotLoaded,

    /// Save or photo upload without an open form.
    #[error("No entry form is open")]
    NoOpenForm,
}

impl EditorError {
    pub fn user_message(&self) -> String {
        match self {
            EditorError::Validation(e) => e.user_message(),
            EditorError::Api(e) => e.user_message("Gagal menyimpan data"),
            EditorError::Conflict { .. } => {
                "Data telah diubah di sesi lain. Daftar sudah dimuat ulang, silakan ulangi.".to_string()
            }
            EditorError::UnknownEntry(_) | EditorError::NotLoaded | EditorError::NoOpenForm => {
                "Data tidak ditemukan, silakan muat ulang halaman".to_string()
            }
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building a [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Backend URL is empty or not http(s).
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Numeric setting could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    /// `.env` file exists but could not be read.
    #[error("Failed to load env file: {0}")]
    EnvFile(String),
}

// =============================================================================
// Umbrella Error
// =============================================================================

/// Top-level error for the CLI and other host tools.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Not found: {0}")]
    NotFound(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for local validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for wizard transitions.
pub type WizardResult<T> = Result<T, WizardError>;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Result type for host tools.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let api = ApiError::Timeout(15);
        let wizard: WizardError = api.into();
        assert!(wizard.to_string().contains("15"));

        let validation = ValidationError::UnansweredQuestions(2);
        let client: ClientError = WizardError::from(validation).into();
        assert!(client.to_string().contains("2 question"));
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Registration not found".into()),
        };
        assert_eq!(err.user_message("Gagal"), "Registration not found");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message("Gagal"), "Gagal");
    }

    #[test]
    fn test_status_display_without_detail() {
        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(err.to_string(), "Server error (500): no detail");
        assert!(!err.is_not_found());
        assert!(ApiError::Status { status: 404, detail: None }.is_not_found());
        assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
    }

    #[test]
    fn test_editor_messages() {
        let err: EditorError = ValidationError::MissingField("name").into();
        assert_eq!(err.user_message(), "Mohon isi semua field yang wajib");
        let err = EditorError::Conflict { field: "partners" };
        assert!(err.user_message().contains("dimuat ulang"));
        assert!(err.to_string().contains("partners"));
    }
}
