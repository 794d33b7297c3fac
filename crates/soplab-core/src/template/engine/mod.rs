//! Template engine implementation

mod blocks;
pub(crate) mod escape;
mod tokenize;

use std::collections::BTreeSet;

use crate::record::{DataRecord, Value};
use crate::template::error::TemplateError;

use blocks::find_if_end;
use escape::{contains_entity, escape_html};
use tokenize::{TokenKind, TokenStream};

/// Field names whose values are caller-built HTML fragments and bypass
/// escaping by default: the procedure step list, the change-history table
/// rows, and the `<br>`-joined optional sections. The view layer escapes
/// the text inside these fragments before joining. Callers may extend or
/// replace the set via [`TemplateEngine::with_raw_fields`] (configured
/// through `soplab.toml`).
pub const DEFAULT_RAW_FIELDS: [&str; 5] = [
    "procedure",
    "changeHistoryRows",
    "abbreviations",
    "references",
    "annexures",
];

/// Template engine merging a [`DataRecord`] into an HTML template
///
/// Rendering is a pure function of (template, record, raw-field set):
/// deterministic, no I/O, never fails. Strict syntax checking is a separate
/// opt-in step via [`TemplateEngine::validate`].
pub struct TemplateEngine {
    raw_fields: BTreeSet<String>,
}

impl TemplateEngine {
    /// Create an engine with the default raw-markup allow-list
    pub fn new() -> Self {
        Self::with_raw_fields(DEFAULT_RAW_FIELDS.iter().map(|s| s.to_string()))
    }

    /// Create an engine with an explicit raw-markup allow-list
    pub fn with_raw_fields(fields: impl IntoIterator<Item = String>) -> Self {
        Self {
            raw_fields: fields.into_iter().collect(),
        }
    }

    /// Render a template with the given record
    ///
    /// Processing order is significant: conditional bodies may contain
    /// variable placeholders that the substitution stage resolves.
    ///
    /// 1. Resolve `{{#if key}}...{{/if}}` blocks (keep or drop bodies)
    /// 2. Substitute `{{key}}` tokens for every record field
    /// 3. Delete leftover `{{...}}` tokens
    /// 4. Collapse stray single-brace fragments
    pub fn render(&self, template: &str, record: &DataRecord) -> String {
        let html = resolve_conditionals(template, record);
        let html = self.substitute_values(&html, record);
        let html = strip_residual_tokens(&html);
        collapse_stray_braces(&html)
    }

    /// Check a template for malformed syntax without rendering it
    ///
    /// Reports the first unclosed `{{#if}}`, dangling `{{/if}}`, or `{{`
    /// with no closing `}}`. Rendering stays fail-soft either way; this is
    /// for surfacing template authoring mistakes at load time.
    pub fn validate(&self, template: &str) -> Result<(), TemplateError> {
        let mut stream = TokenStream::new(template);
        let mut open_block: Option<(String, usize)> = None;

        for token in stream.by_ref() {
            match token.kind {
                TokenKind::IfStart { key } => {
                    // Nested openers are not an error here: the first {{/if}}
                    // closes whatever is open, matching render behavior
                    if open_block.is_none() {
                        open_block = Some((key, token.line));
                    }
                }
                TokenKind::IfEnd => {
                    if open_block.take().is_none() {
                        return Err(TemplateError::DanglingEnd { line: token.line });
                    }
                }
                TokenKind::Placeholder { .. } => {}
            }
        }

        if stream.in_open_token() {
            return Err(TemplateError::UnclosedPlaceholder {
                line: stream.line(),
            });
        }

        if let Some((key, line)) = open_block {
            return Err(TemplateError::UnclosedBlock { key, line });
        }

        Ok(())
    }

    /// Stage 2: replace `{{key}}` tokens for every field in the record
    ///
    /// Matching is on the full brace-delimited token, so keys that are
    /// prefixes of one another (`title` / `title2`) cannot corrupt each
    /// other's placeholders.
    fn substitute_values(&self, html: &str, record: &DataRecord) -> String {
        let mut out = html.to_string();

        for (key, value) in record.iter() {
            let token = format!("{{{{{}}}}}", key);
            if !out.contains(&token) {
                continue;
            }
            let replacement = self.stringify(key, value);
            out = out.replace(&token, &replacement);
        }

        out
    }

    /// Stringify a value for substitution, applying the escaping policy
    fn stringify(&self, key: &str, value: &Value) -> String {
        match value {
            Value::Str(s) => {
                // Allow-list first; the entity check only guards against
                // re-escaping content that was already escaped upstream
                if self.raw_fields.contains(key) || contains_entity(s) {
                    s.clone()
                } else {
                    escape_html(s)
                }
            }
            // Numbers and booleans cannot contain markup
            other => other.to_display(),
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render with a default engine
pub fn render(template: &str, record: &DataRecord) -> String {
    TemplateEngine::new().render(template, record)
}

/// Stage 1: resolve conditional blocks left to right
///
/// A truthy key keeps the block body verbatim (its inner placeholders are
/// handled by stage 2); a falsy key drops the whole span. An unterminated
/// `{{#if}}` is passed through for residual cleanup, leaving its would-be
/// body in place as literal text.
fn resolve_conditionals(template: &str, record: &DataRecord) -> String {
    let mut output = String::with_capacity(template.len());
    let mut pos = 0;

    while pos < template.len() {
        let remaining = &template[pos..];

        let Some(open) = remaining.find("{{") else {
            output.push_str(remaining);
            break;
        };

        output.push_str(&remaining[..open]);
        let token_start = pos + open;

        let Some(close) = template[token_start + 2..].find("}}") else {
            // Unclosed {{ survives to the cleanup passes
            output.push_str(&template[token_start..]);
            break;
        };

        let content = &template[token_start + 2..token_start + 2 + close];
        let token_end = token_start + 2 + close + 2;

        let Some(key) = content.trim().strip_prefix("#if ") else {
            // Not a conditional opener; stage 2 handles it
            output.push_str(&template[token_start..token_end]);
            pos = token_end;
            continue;
        };

        match find_if_end(&template[token_end..]) {
            Some((body_len, end_len)) => {
                if record.is_truthy(key.trim()) {
                    output.push_str(&template[token_end..token_end + body_len]);
                }
                pos = token_end + body_len + end_len;
            }
            None => {
                output.push_str(&template[token_start..token_end]);
                pos = token_end;
            }
        }
    }

    output
}

/// Stage 3: delete any remaining `{{...}}` token
///
/// Guarantees the residual-placeholder-free output invariant: keys the
/// record did not cover vanish instead of leaking `{{...}}` into documents.
fn strip_residual_tokens(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut pos = 0;

    while pos < html.len() {
        let remaining = &html[pos..];

        let Some(open) = remaining.find("{{") else {
            output.push_str(remaining);
            break;
        };

        output.push_str(&remaining[..open]);
        let token_start = pos + open;

        match html[token_start + 2..].find("}}") {
            Some(close) if close > 0 => {
                // Drop the whole token
                pos = token_start + 2 + close + 2;
            }
            _ => {
                // No closing }} (or empty {{}}): leave for the stray-brace pass
                output.push_str(&html[token_start..token_start + 2]);
                pos = token_start + 2;
            }
        }
    }

    output
}

/// Stage 4: collapse stray single-brace fragments
///
/// `{ }` disappears and `{ text }` unwraps to `text` (trimmed). Guards
/// against partially-escaped upstream content leaking braces into the
/// final document. Braces that never pair up are left untouched.
fn collapse_stray_braces(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let bytes = html.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'{' {
            let next = html[pos..].find('{').map_or(html.len(), |i| pos + i);
            output.push_str(&html[pos..next]);
            pos = next;
            continue;
        }

        // Find the matching } with no intervening brace
        let inner = &html[pos + 1..];
        let close = inner.find(['{', '}']);
        match close {
            Some(i) if inner.as_bytes()[i] == b'}' => {
                output.push_str(inner[..i].trim());
                pos = pos + 1 + i + 1;
            }
            _ => {
                // Another { first, or no closing brace at all
                output.push('{');
                pos += 1;
            }
        }
    }

    output
}

#[cfg(test)]
mod tests;
