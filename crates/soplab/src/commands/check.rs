//! Check command - strict template validation at load time
//!
//! Rendering is fail-soft by design; this command is where template
//! authoring mistakes are surfaced instead.

use anyhow::Result;
use colored::Colorize;
use soplab_core::template::TemplateEngine;

use crate::context::Context;

/// Validate a template's placeholder syntax
pub fn run(template_name: &str, verbose: bool) -> Result<()> {
    let mut ctx = Context::new(verbose)?;
    let text = ctx.store.load(template_name)?.to_string();

    let engine = TemplateEngine::new();
    match engine.validate(&text) {
        Ok(()) => {
            println!("{} Template '{}' is well-formed", "✓".green().bold(), template_name);
            Ok(())
        }
        Err(e) => {
            println!("{} Template '{}': {}", "✗".red().bold(), template_name, e);
            anyhow::bail!("template validation failed");
        }
    }
}
