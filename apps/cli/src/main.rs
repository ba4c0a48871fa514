//! Command-line front end for the dimensional expression analyzer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mensura_analyzer::analyze;
use mensura_quantity::registry;

#[derive(Parser)]
#[command(
    name = "mensura",
    version,
    about = "Dimensional analysis of expressions over physical quantities"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze an expression and report its physical dimension
    Analyze {
        /// Expression over quantity names, e.g. "force * distance"
        expression: String,
    },
    /// Search quantities by name, alias, symbol or unit
    Search {
        /// Case-insensitive substring
        query: String,
    },
    /// List every quantity in the database
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { expression } => cmd_analyze(&expression),
        Command::Search { query } => {
            cmd_search(&query);
            Ok(())
        }
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn cmd_analyze(expression: &str) -> Result<()> {
    let analysis = analyze(expression, registry())?;

    println!("expression : {}", analysis.reconstructed);
    println!("dimension  : {}", analysis.dimension.symbolic());
    println!("readable   : {}", analysis.dimension.readable());
    println!("si units   : {}", analysis.dimension.si_units());

    let names = registry().names_for(analysis.dimension);
    if !names.is_empty() {
        println!("quantities : {}", names.join(", "));
    }
    let units = registry().units_for(analysis.dimension);
    if !units.is_empty() {
        println!("units      : {}", units.join(", "));
    }

    Ok(())
}

fn cmd_search(query: &str) {
    let hits = registry().search(query);
    if hits.is_empty() {
        println!("no quantities match '{query}'");
        return;
    }
    for def in hits {
        println!(
            "{:<24} {:<16} {}",
            def.name,
            def.dimension.symbolic(),
            def.units.join(", ")
        );
    }
}

fn cmd_list() {
    for def in registry().all() {
        println!(
            "{:<24} {:<16} {}",
            def.name,
            def.dimension.symbolic(),
            def.units.join(", ")
        );
    }
}
