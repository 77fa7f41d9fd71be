//! `patterns`: browse and run the design pattern catalog.
//!
//! ```bash
//! patterns list
//! patterns list --category behavioral --json
//! patterns run observer chain
//! patterns --no-color all
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;

use design_patterns::catalog::{self, Category, Pattern};
use design_patterns::{logging, Runner, RunnerConfig};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run classic design pattern demos", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Runner configuration file (default: ./patterns.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored banners
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,

        /// Only patterns in this category
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Run one or more patterns by name or alias
    Run {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Run the configured selection, or every pattern
    All,
}

fn parse_category(value: &str) -> std::result::Result<Category, String> {
    let wanted = value.trim().to_ascii_lowercase();
    Category::ALL
        .into_iter()
        .find(|c| c.as_str() == wanted)
        .ok_or_else(|| {
            format!(
                "unknown category '{value}' (expected {})",
                Category::ALL.iter().map(|c| c.as_str()).join(", ")
            )
        })
}

const NAME_WIDTH: usize = 24;

fn print_list(patterns: &[&Pattern], color: bool, out: &mut dyn Write) -> Result<()> {
    for pattern in patterns {
        // Pad before coloring; escape codes would count toward the width.
        let padded = format!("{:<NAME_WIDTH$}", pattern.name);
        let name = if color {
            padded.green().bold().to_string()
        } else {
            padded
        };
        write!(out, "{name} {:<11} {}", pattern.category, pattern.intent)?;
        if !pattern.aliases.is_empty() {
            write!(out, " (aliases: {})", pattern.aliases.iter().join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_handle = logging::init(cli.verbose, None);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = RunnerConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load runner configuration")?;
    config.apply_no_color(None, cli.no_color);
    if let (Some(handle), Some(filter)) = (&log_handle, config.log_filter.as_deref()) {
        handle.reconfigure(cli.verbose, Some(filter));
    }
    colored::control::set_override(config.color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { json, category } => {
            let patterns: Vec<&Pattern> = match category {
                Some(category) => catalog::by_category(category).collect(),
                None => catalog::all().iter().collect(),
            };
            if json {
                serde_json::to_writer_pretty(&mut out, &patterns)?;
                writeln!(out)?;
            } else {
                print_list(&patterns, config.color, &mut out)?;
            }
        }
        Commands::Run { names } => {
            let patterns = names
                .iter()
                .map(|name| catalog::resolve(name))
                .collect::<design_patterns::Result<Vec<_>>>()?;
            Runner::new(config).run_many(&patterns, &mut out)?;
        }
        Commands::All => {
            Runner::new(config).run_selection(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_accepts_known_names() {
        assert_eq!(parse_category("creational"), Ok(Category::Creational));
        assert_eq!(parse_category("structural"), Ok(Category::Structural));
        assert_eq!(parse_category("behavioral"), Ok(Category::Behavioral));
    }

    #[test]
    fn test_parse_category_folds_case_and_whitespace() {
        assert_eq!(parse_category("  Behavioral "), Ok(Category::Behavioral));
        assert_eq!(parse_category("STRUCTURAL"), Ok(Category::Structural));
    }

    #[test]
    fn test_parse_category_rejects_unknown() {
        let err = parse_category("functional").unwrap_err();
        assert_eq!(
            err,
            "unknown category 'functional' (expected creational, structural, behavioral)"
        );
    }

    #[test]
    fn test_no_color_flag_beats_config() {
        let cli = Cli::parse_from(["patterns", "--no-color", "list"]);
        let mut config = RunnerConfig::parse_toml("color = true").unwrap();
        config.apply_no_color(None, cli.no_color);
        assert!(!config.color);
    }

    #[test]
    fn test_list_pads_names_before_coloring() {
        let patterns: Vec<&Pattern> = catalog::all().iter().collect();
        let mut plain = Vec::new();
        print_list(&patterns, false, &mut plain).unwrap();
        let plain = String::from_utf8(plain).unwrap();
        for line in plain.lines() {
            assert_eq!(line.as_bytes()[NAME_WIDTH], b' ', "misaligned: {line}");
        }

        colored::control::set_override(true);
        let mut colored_out = Vec::new();
        print_list(&patterns, true, &mut colored_out).unwrap();
        colored::control::unset_override();
        let colored_out = String::from_utf8(colored_out).unwrap();
        assert!(colored_out.contains('\x1b'));
        let escapes = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
        assert_eq!(escapes.replace_all(&colored_out, ""), plain);
    }
}
