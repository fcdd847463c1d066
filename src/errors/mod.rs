use std::path::Path;
use thiserror::Error;

/// Every way building or serving a report can fail.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to open {path}: {reason}")]
    FileOpen {
        path: String,
        reason: String,
    },

    #[error("Malformed JSON in {path} (line {line}): {reason}")]
    JsonDecode {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Template '{name}' failed to compile: {reason}")]
    TemplateCompile {
        name: String,
        reason: String,
    },

    #[error("Template '{name}' failed to render: {reason}")]
    TemplateRender {
        name: String,
        reason: String,
    },

    #[error("Failed to write {path}: {reason}")]
    OutputWrite {
        path: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    Configuration {
        field: String,
        message: String,
        suggestion: Option<String>,
    },

    #[error("Server error during {operation}: {reason}")]
    Server {
        operation: String,
        reason: String,
    },
}

impl AuditError {
    pub fn file_open(path: &Path, error: &std::io::Error) -> Self {
        Self::FileOpen {
            path: path.display().to_string(),
            reason: error.to_string(),
        }
    }

    pub fn json_decode(path: &Path, error: &serde_json::Error) -> Self {
        Self::JsonDecode {
            path: path.display().to_string(),
            line: error.line(),
            reason: error.to_string(),
        }
    }

    pub fn template_compile(name: &str, reason: impl ToString) -> Self {
        Self::TemplateCompile {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn template_render(name: &str, error: &minijinja::Error) -> Self {
        Self::TemplateRender {
            name: name.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn output_write(path: &Path, error: &std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.display().to_string(),
            reason: error.to_string(),
        }
    }

    pub fn config_error(field: &str, message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            field: field.to_string(),
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn server_error(operation: &str, reason: impl ToString) -> Self {
        Self::Server {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the report can still be produced, with a blank section, after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileOpen { .. }
                | Self::JsonDecode { .. }
                | Self::TemplateCompile { .. }
                | Self::TemplateRender { .. }
        )
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Server { .. } | Self::OutputWrite { .. } => ErrorSeverity::Critical,
            Self::TemplateCompile { .. } | Self::Configuration { .. } => ErrorSeverity::High,
            Self::FileOpen { .. } | Self::JsonDecode { .. } => ErrorSeverity::Medium,
            Self::TemplateRender { .. } => ErrorSeverity::Low,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for report operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log an error with its severity and any configuration hint.
    pub fn handle_error(error: &AuditError) {
        let severity = error.severity();
        log::error!("{} [{}] {}", severity.emoji(), severity.name(), error);

        if let AuditError::Configuration { suggestion: Some(suggestion), .. } = error {
            log::error!("💡 Suggestion: {}", suggestion);
        }

        if error.is_recoverable() {
            log::warn!("⚠️ Continuing with an empty section");
        }
    }
}

impl From<toml::de::Error> for AuditError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            field: "config file".to_string(),
            message: error.message().to_string(),
            suggestion: Some("Run 'audit-report init' to create a sample configuration".to_string()),
        }
    }
}
