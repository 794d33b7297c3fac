//! Sops command - list instrument SOPs for a department

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::context::Context;
use crate::output;

/// List instrument SOPs for the given department
pub fn run(department: &str, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let instruments = ctx.catalog.instruments(department)?;

    if json {
        let value = json!({
            "department": department,
            "instruments": instruments,
        });
        output::print_json(&value)?;
        return Ok(());
    }

    if instruments.is_empty() {
        println!("{} No SOPs for department '{}'", "!".yellow(), department);
        return Ok(());
    }

    for instrument in &instruments {
        output::print_text(&format!("{}  {}", instrument.key, instrument.name))?;
    }

    if verbose {
        println!("\n{} {} SOP(s)", "✓".green().bold(), instruments.len());
    }

    Ok(())
}
