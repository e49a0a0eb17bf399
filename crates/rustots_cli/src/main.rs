//! rustots: Command-line front end for the TypeScript-like source analyzer.
//!
//! Usage:
//!   rustots [options] [FILE]...
//!   rustots --stdin [options] < input.ts
//!
//! The analysis result is the only thing written to stdout, as JSON.
//! Statistics, rendered diagnostics, errors and logs all go to stderr.

mod diagnostic;

use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use rustots_analyzer::{
    analyze_files, analyze_with, load_config, load_source, parse_token_kinds, Analysis,
    AnalysisMode, AnalysisOptions, AnalyzeError, AnalyzerConfig, ConfigError, FileAnalysis,
    SourceError, SourceInput,
};
use rustots_core::InternalError;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::diagnostic::report_diagnostics;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT_ERROR: i32 = 1;
const EXIT_INTERNAL_ERROR: i32 = 70;

#[derive(ClapParser, Debug)]
#[command(
    name = "rustots",
    version,
    about = "rustots - lexical and syntactic analysis of TypeScript-like source"
)]
struct Cli {
    /// Source files to analyze.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Read the source from standard input.
    #[arg(long, conflicts_with = "files")]
    stdin: bool,

    /// Only tokenize; do not build an AST.
    #[arg(long)]
    lexical: bool,

    /// Only output tokens of these kinds (e.g. keyword,identifier).
    #[arg(long, value_name = "KINDS")]
    filter: Option<String>,

    /// Omit whitespace and newline tokens from the output.
    #[arg(long = "no-whitespace")]
    no_whitespace: bool,

    /// Only output tokens the scanner could not complete.
    #[arg(long = "only-malformed")]
    only_malformed: bool,

    /// Print token and AST statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Render diagnostics with source context on stderr.
    #[arg(long)]
    report: bool,

    /// Path to a JSON configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

/// Failures that prevent a result from being written.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
enum CliError {
    #[error("no input given")]
    #[diagnostic(
        code(rustots::no_input),
        help("pass one or more FILE arguments, or --stdin")
    )]
    NoInput,

    #[error(transparent)]
    #[diagnostic(code(rustots::input))]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(code(rustots::config))]
    Config(#[from] ConfigError),

    #[error("internal analyzer error: {0}")]
    #[diagnostic(
        code(rustots::internal),
        help("this is a bug in rustots, not in the analyzed source")
    )]
    Internal(#[from] InternalError),

    #[error("cannot serialize the result: {0}")]
    #[diagnostic(code(rustots::output))]
    Output(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::NoInput | CliError::Source(_) | CliError::Config(_) => EXIT_INPUT_ERROR,
            CliError::Internal(_) | CliError::Output(_) => EXIT_INTERNAL_ERROR,
        }
    }
}

impl From<AnalyzeError> for CliError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::Source(err) => CliError::Source(err),
            AnalyzeError::Internal(err) => CliError::Internal(err),
        }
    }
}

/// Options resolved from the config file and the command line.
#[derive(Debug)]
struct Settings {
    options: AnalysisOptions,
    stats: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(errors) => {
            let code = errors
                .iter()
                .map(CliError::exit_code)
                .max()
                .unwrap_or(EXIT_INPUT_ERROR);
            for err in errors {
                eprintln!("{:?}", miette::Report::new(err));
            }
            code
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<(), Vec<CliError>> {
    let settings = resolve_settings(cli).map_err(|err| vec![err])?;
    debug!(?settings, "resolved settings");

    if cli.stdin {
        return run_single(cli, &settings, SourceInput::Stdin).map_err(|err| vec![err]);
    }
    match cli.files.as_slice() {
        [] => Err(vec![CliError::NoInput]),
        [file] => run_single(cli, &settings, SourceInput::File(file.clone())).map_err(|err| vec![err]),
        files => run_many(cli, &settings, files),
    }
}

/// Merge the config file (if any) with the command-line flags. Flags win.
fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };
    let mut options = config.to_options()?;

    if cli.lexical {
        options.mode = AnalysisMode::Lexical;
    }
    if let Some(ref list) = cli.filter {
        options.filter.kinds = Some(parse_token_kinds(list).map_err(ConfigError::from)?);
    }
    if cli.no_whitespace {
        options.filter.exclude_whitespace = true;
    }
    if cli.only_malformed {
        options.filter.only_malformed = true;
    }

    Ok(Settings {
        options,
        stats: cli.stats || config.stats.unwrap_or(false),
    })
}

fn run_single(cli: &Cli, settings: &Settings, input: SourceInput) -> Result<(), CliError> {
    let source = load_source(&input)?;
    let analysis = analyze_with(&source, &settings.options)?;

    print_json(&serde_json::to_value(&analysis)?, cli.compact);

    let name = input.name();
    if settings.stats {
        print_stats(None, &analysis)?;
    }
    if cli.report {
        report_diagnostics(&analysis.diagnostics, &name, &source);
    }
    Ok(())
}

/// Several files: either every file yields a result, or nothing is written
/// to stdout.
fn run_many(cli: &Cli, settings: &Settings, files: &[PathBuf]) -> Result<(), Vec<CliError>> {
    let mut analyses: Vec<FileAnalysis> = Vec::with_capacity(files.len());
    let mut errors: Vec<CliError> = Vec::new();
    for result in analyze_files(files, &settings.options) {
        match result {
            Ok(file) => analyses.push(file),
            Err(err) => errors.push(err.into()),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let value = serde_json::to_value(&analyses).map_err(|err| vec![err.into()])?;
    print_json(&value, cli.compact);

    for file in &analyses {
        if settings.stats {
            print_stats(Some(&file.file), &file.analysis).map_err(|err| vec![err])?;
        }
        if cli.report {
            report_diagnostics(&file.analysis.diagnostics, &file.file, &file.source);
        }
    }
    Ok(())
}

fn print_json(value: &serde_json::Value, compact: bool) {
    if compact {
        println!("{}", value);
    } else {
        println!("{:#}", value);
    }
}

fn print_stats(file: Option<&str>, analysis: &Analysis) -> Result<(), CliError> {
    let mut stats = json!({
        "tokens": analysis.token_statistics(),
        "diagnostics": {
            "total": analysis.diagnostics.len(),
            "errors": analysis.diagnostics.iter().filter(|d| d.is_error()).count(),
        },
    });
    if let Some(ast) = analysis.ast_statistics() {
        stats["ast"] = serde_json::to_value(ast)?;
    }
    if let Some(file) = file {
        stats["file"] = json!(file);
    }
    eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
