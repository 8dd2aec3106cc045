use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

use splicedump_core::{Pattern, decode_file};

#[derive(Parser, Debug)]
#[command(name = "splicedump")]
#[command(version)]
#[command(
    about = "Decoder for SPLICE drum-machine pattern files.",
    long_about = None,
    after_help = "Examples:\n  splicedump print pattern_1.splice\n  splicedump export pattern_1.splice -o pattern_1.json\n  splicedump export pattern_1.splice --stdout --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a .splice file and print the canonical pattern printout.
    #[command(alias = "show")]
    Print {
        /// Path to a .splice file
        input: PathBuf,
    },

    /// Decode a .splice file and export the pattern as JSON.
    Export {
        /// Path to a .splice file
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        out: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "out")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Print { input } => cmd_print(input),
        Commands::Export {
            input,
            out,
            stdout,
            pretty,
            compact,
            quiet,
        } => cmd_export(input, out, stdout, pretty, compact, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_print(input: PathBuf) -> Result<(), CliError> {
    let pattern = decode_input(&input)?;
    print!("{pattern}");
    Ok(())
}

fn cmd_export(
    input: PathBuf,
    out: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let pattern = decode_input(&input)?;
    let json = serialize_pattern(&pattern, pretty, compact)?;

    if stdout {
        println!("{}", json);
        return Ok(());
    }

    let out = out.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--out or --stdout".to_string()),
        )
    })?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&out, json).with_context(|| format!("Failed to write output: {}", out.display()))?;

    if !quiet {
        eprintln!("OK: pattern written -> {}", out.display());
    }
    Ok(())
}

fn decode_input(input: &PathBuf) -> Result<Pattern, CliError> {
    let resolved = resolve_input_path(input)?;
    validate_input_file(&resolved)?;
    decode_file(&resolved)
        .with_context(|| format!("Failed to decode: {}", resolved.display()))
        .map_err(Into::into)
}

fn serialize_pattern(pattern: &Pattern, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(pattern)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(pattern)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .splice file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .splice file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "splice" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .splice file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .splice file".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single pattern file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches.iter().take(3).collect::<Vec<_>>();
        if !listed.is_empty() {
            let mut details = String::new();
            details.push_str("; matches: ");
            details.push_str(
                &listed
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            if matches.len() > 3 {
                details.push_str(", ...");
            }
            message.push_str(&details);
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
