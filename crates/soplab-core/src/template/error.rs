//! Template validation error types
//!
//! Rendering itself never fails; these errors are only produced by
//! [`TemplateEngine::validate`](crate::template::TemplateEngine::validate)
//! when a caller opts into strict checking at template-load time.

use thiserror::Error;

/// Template validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{{#if key}}` without a matching `{{/if}}`
    #[error("unclosed conditional block for key '{key}' starting at line {line}")]
    UnclosedBlock { key: String, line: usize },

    /// `{{/if}}` without a preceding `{{#if}}`
    #[error("unexpected {{{{/if}}}} without matching {{{{#if}}}} at line {line}")]
    DanglingEnd { line: usize },

    /// `{{` without a closing `}}`
    #[error("unclosed placeholder at line {line}")]
    UnclosedPlaceholder { line: usize },
}
