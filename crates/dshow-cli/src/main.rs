use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dshow_core::{DShowInputChannel, PresetDump, SectionKind};
use glob::glob;

#[derive(Parser, Debug)]
#[command(name = "dshow")]
#[command(version)]
#[command(
    about = "Read, inspect and write D-Show Input Channel presets.",
    long_about = None,
    after_help = "Examples:\n  dshow preset dump kick.ich --stdout --pretty\n  dshow preset describe 'presets/kick*.ich'\n  dshow preset rewrite kick.ich -o kick-clean.ich"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on input channel preset files.
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PresetCommands {
    /// Decode a preset and write a JSON dump of its header and sections.
    Dump {
        /// Preset file or a glob matching exactly one file
        input: PathBuf,

        /// Output dump path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write the JSON dump to stdout
        #[arg(long, conflicts_with = "report")]
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
    /// Decode a preset and print every field.
    Describe {
        /// Preset file or a glob matching exactly one file
        input: PathBuf,
    },
    /// Decode a preset and write it back out re-encoded.
    Rewrite {
        /// Preset file or a glob matching exactly one file
        input: PathBuf,

        /// Output preset path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Write a preset with default settings.
    New {
        /// Output preset path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// File Type header value
        #[arg(long)]
        file_type: Option<String>,

        /// User Comment header value
        #[arg(long)]
        comment: Option<String>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Preset { command } => match command {
            PresetCommands::Dump {
                input,
                report,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_preset_dump(input, report, stdout, pretty, compact, quiet),
            PresetCommands::Describe { input } => cmd_preset_describe(input),
            PresetCommands::Rewrite {
                input,
                output,
                quiet,
            } => cmd_preset_rewrite(input, output, quiet),
            PresetCommands::New {
                output,
                file_type,
                comment,
                quiet,
            } => cmd_preset_new(output, file_type, comment, quiet),
        },
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

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
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
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_preset_dump(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    let report = if stdout {
        None
    } else {
        let report = report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?;
        ensure_distinct_output(&input, &report)?;
        Some(report)
    };

    let preset = load_preset(&input)?;
    let json = serialize_dump(&preset.dump(), pretty, compact)?;

    match report {
        None => print!("{}", json),
        Some(report) => {
            store(&report, json.as_bytes())?;
            if !quiet {
                eprintln!("OK: dump written -> {}", report.display());
            }
        }
    }
    Ok(())
}

fn cmd_preset_describe(input: PathBuf) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    let preset = load_preset(&input)?;
    print!("{}", preset.describe());
    Ok(())
}

fn cmd_preset_rewrite(input: PathBuf, output: PathBuf, quiet: bool) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    ensure_distinct_output(&input, &output)?;

    let preset = load_preset(&input)?;
    let missing = SectionKind::ALL
        .into_iter()
        .filter(|kind| !preset.body.was_decoded(*kind))
        .count();
    store(&output, &preset.encode())?;

    if !quiet {
        if missing > 0 {
            eprintln!("note: added {} section(s) absent from the input", missing);
        }
        eprintln!("OK: preset written -> {}", output.display());
    }
    Ok(())
}

fn cmd_preset_new(
    output: PathBuf,
    file_type: Option<String>,
    comment: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut preset = DShowInputChannel::default();
    if let Some(file_type) = file_type {
        preset.header.file_type = file_type;
    }
    if let Some(comment) = comment {
        preset.header.user_comment = comment;
    }
    check_header_text(&preset)?;

    store(&output, &preset.encode())?;
    if !quiet {
        eprintln!("OK: preset written -> {}", output.display());
    }
    Ok(())
}

fn load_preset(input: &Path) -> Result<DShowInputChannel, CliError> {
    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    log::info!("read {} bytes from {}", bytes.len(), input.display());

    DShowInputChannel::decode(&bytes).map_err(|err| {
        CliError::new(
            format!("failed to decode {}: {}", input.display(), err),
            Some("expected a D-Show Input Channel preset".to_string()),
        )
    })
}

fn store(output: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, bytes)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    log::info!("wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

/// Header strings are written null-terminated, so an embedded NUL would
/// end the token early and break the next decode.
fn check_header_text(preset: &DShowInputChannel) -> Result<(), CliError> {
    let header = &preset.header;
    for (flag, value) in [
        ("--file-type", &header.file_type),
        ("--comment", &header.user_comment),
    ] {
        if value.contains('\0') {
            return Err(CliError::new(
                format!("{} must not contain NUL characters", flag),
                None,
            ));
        }
    }
    Ok(())
}

fn serialize_dump(dump: &PresetDump, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(dump)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(dump)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing output directory cannot contain the input.
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", output.display()))?;

    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass the path of an input channel preset".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass the path of an input channel preset".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
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
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>();
        message.push_str("; matches: ");
        message.push_str(&listed.join(", "));
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(
            message,
            Some("pass a single preset file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
