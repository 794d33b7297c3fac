use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoplabError {
    // Config errors
    #[error("CONFIG_NOT_FOUND: soplab.toml not found in current or parent directories")]
    ConfigNotFound,

    #[error("CONFIG_PARSE_ERROR: failed to parse soplab.toml: {0}")]
    ConfigParseError(String),

    // Catalog errors
    #[error("CATALOG_READ_ERROR: failed to read '{path}': {reason}")]
    CatalogReadError { path: PathBuf, reason: String },

    #[error("CATALOG_PARSE_ERROR: failed to parse '{path}': {reason}")]
    CatalogParseError { path: PathBuf, reason: String },

    #[error("DEPARTMENT_NOT_FOUND: department '{0}' not found in catalog")]
    DepartmentNotFound(String),

    #[error("SOP_NOT_FOUND: SOP '{sop}' not found in department '{department}'")]
    SopNotFound { department: String, sop: String },

    // Template store errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),

    #[error("TEMPLATE_PATH_ESCAPE: template name '{0}' resolves outside the templates directory")]
    TemplatePathEscape(String),

    // Output errors
    #[error("OUTPUT_WRITE_ERROR: failed to write '{path}': {reason}")]
    OutputWriteError { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for SoplabError {
    fn from(err: serde_json::Error) -> Self {
        SoplabError::Generic(format!("JSON error: {}", err))
    }
}

impl From<crate::template::error::TemplateError> for SoplabError {
    fn from(err: crate::template::error::TemplateError) -> Self {
        SoplabError::Generic(format!("Template error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SoplabError>;
