//! Rendering error types.

/// Report rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    Registration(#[from] handlebars::TemplateError),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date formatting error.
    #[error("Date formatting error: {0}")]
    Date(#[from] time::error::Format),

    /// Failed to write to the output.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
