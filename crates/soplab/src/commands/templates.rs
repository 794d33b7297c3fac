//! Templates command - list available document templates

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::context::Context;
use crate::output;

/// List template names from the templates directory
pub fn run(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let names = ctx.store.list()?;

    if json {
        let value = json!({
            "templates": names,
        });
        output::print_json(&value)?;
        return Ok(());
    }

    if names.is_empty() {
        println!(
            "{} No templates in {}",
            "!".yellow(),
            ctx.store.dir().display()
        );
        return Ok(());
    }

    for name in &names {
        output::print_text(name)?;
    }

    if verbose {
        println!("\n{} {} template(s)", "✓".green().bold(), names.len());
    }

    Ok(())
}
