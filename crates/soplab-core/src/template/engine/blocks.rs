//! Conditional block matching

use super::tokenize::{TokenKind, TokenStream};

/// Find the closing `{{/if}}` for a conditional block
///
/// Returns (position, length) of the closing token within `text`, which is
/// the template slice starting right after the `{{#if key}}` opener.
///
/// Blocks do not nest: the *first* `{{/if}}` closes the open block, even if
/// another `{{#if}}` appears before it. An inner opener therefore truncates
/// the outer block; templates must keep conditionals single-level.
pub(crate) fn find_if_end(text: &str) -> Option<(usize, usize)> {
    TokenStream::new(text)
        .find(|token| token.kind == TokenKind::IfEnd)
        .map(|token| (token.start, token.length))
}
