//! Render command - produce a finished SOP document

use std::path::Path;

use anyhow::{anyhow, Result};
use colored::Colorize;
use soplab_core::generate::{generate_document, write_output};

use crate::context::Context;
use crate::output;

/// Render one SOP to HTML, to stdout or a file
pub fn run(
    department: &str,
    sop: &str,
    template: &str,
    set: &[String],
    out: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let mut ctx = Context::new(verbose)?;
    let overrides = parse_overrides(set)?;

    if verbose {
        println!(
            "{} Rendering '{}/{}' with template '{}'",
            "→".cyan(),
            department,
            sop,
            template
        );
    }

    let html = generate_document(
        &ctx.catalog,
        &mut ctx.store,
        &ctx.config,
        department,
        sop,
        template,
        &overrides,
    )?;

    match out {
        Some(path) => {
            write_output(path, &html)?;
            println!("{} Wrote {}", "✓".green().bold(), path.display());
        }
        None => {
            output::print_raw(&html)?;
        }
    }

    Ok(())
}

/// Parse repeated `--set field=value` arguments
fn parse_overrides(set: &[String]) -> Result<Vec<(String, String)>> {
    set.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("invalid --set '{}', expected FIELD=VALUE", pair))
        })
        .collect()
}
