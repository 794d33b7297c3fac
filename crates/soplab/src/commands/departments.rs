//! Departments command - list catalog departments

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::context::Context;
use crate::output;

/// List departments from the catalog
pub fn run(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let departments = ctx.catalog.departments()?;

    if json {
        let value = json!({
            "departments": departments,
        });
        output::print_json(&value)?;
        return Ok(());
    }

    if departments.is_empty() {
        println!("{} No departments in catalog", "!".yellow());
        return Ok(());
    }

    for dept in &departments {
        output::print_text(&format!("{}  {}", dept.key, dept.name))?;
    }

    if verbose {
        println!("\n{} {} department(s)", "✓".green().bold(), departments.len());
    }

    Ok(())
}
