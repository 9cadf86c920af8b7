use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use itertools::Itertools;
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use coverage_core::display::syntax_rules;
use coverage_core::options::DEFAULT_OPTIONS;
use coverage_core::{Analyzer, CoverageReport, Criterion, Options};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Boolean expression, e.g. "(A || B) && !C".
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Maximum number of distinct variables.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_OPTIONS.max_variables)]
    max_variables: usize,

    /// Evaluate truth table rows in parallel.
    #[arg(long, action)]
    parallel: bool,

    /// Print a description of each coverage criterion.
    #[arg(long, action)]
    explain: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    debug!("args = {:?}", args);

    let analyzer = Analyzer::new(Options {
        max_variables: args.max_variables,
        parallel: args.parallel,
    });
    debug!("options = {:?}", analyzer.options());
    let report = match analyzer.analyze(&args.expression) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e.cause());
            eprintln!("{}", syntax_rules().iter().map(|rule| format!("  - {}", rule)).join("\n"));
            return Err(e).wrap_err_with(|| format!("Could not analyze '{}'", args.expression));
        }
    };
    info!("Analyzed '{}' over {} variables", report.expression, report.variables.len());

    match args.format {
        Format::Text => print_text(&report, args.explain),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(report: &CoverageReport, explain: bool) {
    println!("Expression: {}", report.expression);
    println!("Variables: {}", report.variables.iter().join(", "));
    for criterion in Criterion::ALL {
        println!();
        println!("== {} ==", criterion.title());
        if explain {
            for line in criterion.help() {
                println!("{}", line);
            }
            println!();
        }
        print!("{}", report.render(criterion));
    }
}
