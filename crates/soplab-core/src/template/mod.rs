//! Template module - placeholder substitution for HTML documents
//!
//! This module merges a flat [`DataRecord`](crate::record::DataRecord) into an
//! HTML template string. It is a pure text substitution engine, not a general
//! templating language.
//!
//! ## Philosophy
//!
//! - **Fail soft**: `render` never errors in front of a document edit; every
//!   anomaly degrades to "nothing substituted for that token". Strictness is
//!   opt-in via [`TemplateEngine::validate`] at template-load time.
//! - **Escape by default**: string values are HTML-escaped unless the field is
//!   on the explicit raw-markup allow-list; an entity check only exists as a
//!   fallback against double-escaping content already escaped upstream.
//! - **Single-level conditionals**: `{{#if key}}...{{/if}}` does not nest; the
//!   first `{{/if}}` closes the open block.
//!
//! ## Syntax
//!
//! - Variable placeholders: `{{key}}`
//! - Conditional blocks: `{{#if key}} ... {{/if}}`
//!
//! Unrecognized or leftover `{{...}}` tokens are removed from the output, and
//! a final pass collapses stray single-brace fragments leaked by malformed
//! upstream content.

pub mod engine;
pub mod error;

pub use engine::{render, TemplateEngine, DEFAULT_RAW_FIELDS};
pub use error::TemplateError;
