use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::source_error::SourceError;
use crate::enums::source_error_kind::SourceErrorKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RadarError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Per-repository fetch failures, carried when one must be propagated
    SourceFailure {
        repository: String,
        kind: SourceErrorKind,
        reason: String,
    },

    // Persisted-state errors; always fatal to the running pass
    HistoryStoreError {
        path: String,
        operation: String,
        reason: String,
    },

    // Network/API errors outside the per-repository taxonomy
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Report generation errors
    ReportError {
        path: String,
        reason: String,
    },

    // Notification delivery errors
    NotificationError {
        destination: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Multiple errors (for batch validation)
    MultipleErrors {
        errors: Vec<RadarError>,
        context: String,
    },
}

impl RadarError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn history_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::HistoryStoreError {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn report_error(path: &str, reason: &str) -> Self {
        Self::ReportError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn notification_error(destination: &str, reason: &str) -> Self {
        Self::NotificationError {
            destination: destination.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn source_failure(repository: &str, error: &SourceError) -> Self {
        Self::SourceFailure {
            repository: repository.to_string(),
            kind: error.kind(),
            reason: error.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::SourceFailure { .. } => true,
            Self::NetworkError { .. } => true,
            Self::NotificationError { .. } => true,
            Self::ReportError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::HistoryStoreError { .. } => false,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HistoryStoreError { .. } => ErrorSeverity::Critical,
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::SourceFailure { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ReportError { .. } => ErrorSeverity::Medium,
            Self::NotificationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::SourceFailure { repository, kind, reason } => {
                format!("Issue source failed for '{}' ({}): {}", repository, kind.name(), reason)
            }
            Self::HistoryStoreError { path, operation, reason } => {
                format!("History store {} failed at '{}': {}\n💡 Scan state could not be persisted; fix the state directory before rescanning", operation, path, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::ReportError { path, reason } => {
                format!("Report generation failed for '{}': {}\n💡 History commits are unaffected; re-run to re-emit", path, reason)
            }
            Self::NotificationError { destination, reason } => {
                format!("Notification to '{}' failed: {}", destination, reason)
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 Check the format and syntax of the input", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for RadarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for RadarError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for issueradar operations
pub type RadarResult<T> = Result<T, RadarError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &RadarError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for RadarError {
    fn from(error: std::io::Error) -> Self {
        RadarError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RadarError {
    fn from(error: serde_json::Error) -> Self {
        RadarError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for RadarError {
    fn from(error: toml::de::Error) -> Self {
        RadarError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for RadarError {
    fn from(error: reqwest::Error) -> Self {
        RadarError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
