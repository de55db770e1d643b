//! Command-line front end shared by `validate-prompts` and `validate-skills`.
//!
//! Exit codes:
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0` | No problems found |
//! | `1` | One or more diagnostics reported |
//! | `2` | Root missing or not a directory, or bad configuration |

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::lint;
use crate::output::{self, OutputFormat};
use crate::validators::{self, DocumentKind};

/// Fatal failure before any document was checked.
pub const EXIT_FATAL: u8 = 2;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Root directory to validate [default: from config, else .github/prompts or .github/skills]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the rules this command checks and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses `std::env::args` under the command name of `kind`.
    pub fn parse_for(kind: DocumentKind) -> Self {
        let about = match kind {
            DocumentKind::Prompt => "Validate *.prompt.md files in a prompts directory",
            DocumentKind::Skill => "Validate SKILL.md files in a skills directory",
        };
        let matches = Cli::command()
            .name(kind.command_name())
            .about(about)
            .get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Runs one binary end to end and returns its exit code.
pub fn run(kind: DocumentKind) -> ExitCode {
    let cli = Cli::parse_for(kind);
    init_tracing(cli.verbose);
    ExitCode::from(execute(kind, &cli))
}

/// Executes a parsed command line, printing to stdout/stderr.
pub fn execute(kind: DocumentKind, cli: &Cli) -> u8 {
    if cli.list_rules {
        print_rules(kind);
        return 0;
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FATAL;
        }
    };

    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| config.root_for(kind).to_path_buf());

    match lint::run_lint(kind, &root, &config) {
        Ok(report) => {
            print!("{}", output::format_report(&report, cli.format));
            report.exit_code()
        }
        Err(e) if e.is_root_error() => {
            println!("P0 {e}");
            EXIT_FATAL
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    }
}

fn print_rules(kind: DocumentKind) {
    let rules = validators::rules_for(kind);
    println!("{}", format!("{} rules", kind.command_name()).bold().underline());
    println!();
    for rule in &rules {
        println!(
            "  [{tag}] {id:<30} {message}",
            tag = rule.severity.tag(),
            id = rule.id,
            message = rule.message,
        );
        println!("       {:<30} {}", "", rule.remediation.dimmed());
    }
    println!();
    println!("  Total: {} rules", rules.len());
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
