//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soplab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List departments in the catalog
    Departments {
        #[arg(long)]
        json: bool,
    },

    /// List instrument SOPs for a department
    Sops {
        /// Department key (see `soplab departments`)
        #[arg(short, long)]
        department: String,

        #[arg(long)]
        json: bool,
    },

    /// List available document templates
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Check a template for malformed placeholder syntax
    Check {
        /// Template name (see `soplab templates`)
        template: String,
    },

    /// Render an SOP document to HTML
    Render {
        /// Department key
        #[arg(short, long)]
        department: String,

        /// Instrument SOP key
        #[arg(short, long)]
        sop: String,

        /// Template name
        #[arg(short, long, default_value = "standard")]
        template: String,

        /// Override a document field, e.g. --set sopNumber=SOP/CHEM/001
        /// (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
