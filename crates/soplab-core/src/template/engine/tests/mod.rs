//! Tests for the template engine
//!
//! Organized into focused submodules: tokenization, conditional blocks,
//! substitution & escaping, cleanup passes, and load-time validation.

use super::*;

// Test helper functions
mod helpers;


// Rendering tests
mod conditionals;
