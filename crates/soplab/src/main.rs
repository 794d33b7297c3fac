mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Departments { json } => commands::departments::run(json, cli.verbose),
        Commands::Sops { department, json } => commands::sops::run(&department, json, cli.verbose),
        Commands::Templates { json } => commands::templates::run(json, cli.verbose),
        Commands::Check { template } => commands::check::run(&template, cli.verbose),
        Commands::Render {
            department,
            sop,
            template,
            set,
            out,
        } => commands::render::run(&department, &sop, &template, &set, out.as_deref(), cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
