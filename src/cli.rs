//! Command line interface
//!
//! ## Commands
//!
//! - `generate --uss <file> --uxml <file>` - write `<Name>Classes.cs` / `<Name>Strings.cs`
//! - `names --uss <file> | --uxml <file>` - show the names found and their identifiers
//!
//! Settings are layered: defaults, then the JSON config file, then flags.
//! Command functions write to the sinks they are given and return a
//! [`CommandStatus`], only [`run`] turns that into an exit code.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::collections::HashMap;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::asset_source::{AssetSource, FsAssetSource};
use crate::config::{ConfigFile, GeneratorSettings};
use crate::dedup::distinct_names;
use crate::error::{GeneratorError, GeneratorResult, IoContext};
use crate::generator::{
    GenerationRequest, GenerationTarget, build_constant_table, extract_raw_names, generate,
    output_path_for, render_target,
};
use crate::logging;
use crate::unity_project::UnityProject;

/// Generate C# string constants from Unity UI Toolkit stylesheets and UXML documents
#[derive(Parser, Debug)]
#[command(name = "uitk-string-gen")]
#[command(version)]
#[command(about = "Generate C# string constants from Unity UI Toolkit USS and UXML assets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON config file (default: ./uitk-string-gen.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the log here instead of the local app data folder
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log debug details and echo progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate constants classes
    Generate(GenerateArgs),
    /// List the names found in assets and the identifiers they map to
    Names(NamesArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// USS stylesheet to generate `<Name>Classes` from
    #[arg(long, value_name = "FILE")]
    pub uss: Option<PathBuf>,

    /// UXML document to generate `<Name>Strings` from
    #[arg(long, value_name = "FILE")]
    pub uxml: Option<PathBuf>,

    /// Namespace of the generated classes
    #[arg(long)]
    pub namespace: Option<String>,

    /// Output folder (relative paths are relative to the Unity project root)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Identifiers longer than this are abbreviated
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Skip the C# syntax check of generated code
    #[arg(long)]
    pub no_verify: bool,

    /// Print generated code instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("asset").required(true).multiple(true).args(["uss", "uxml"])))]
pub struct NamesArgs {
    /// USS stylesheet to inspect
    #[arg(long, value_name = "FILE")]
    pub uss: Option<PathBuf>,

    /// UXML document to inspect
    #[arg(long, value_name = "FILE")]
    pub uxml: Option<PathBuf>,

    /// Identifiers longer than this are abbreviated
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

fn targets_from(uss: Option<&PathBuf>, uxml: Option<&PathBuf>) -> Vec<GenerationTarget> {
    let mut targets = Vec::new();
    if let Some(path) = uss {
        targets.push(GenerationTarget::style_sheet(path));
    }
    if let Some(path) = uxml {
        targets.push(GenerationTarget::markup(path));
    }
    targets
}

/// Show paths inside a Unity project the way Unity does (`Assets/...`)
fn display_path(path: &Path) -> String {
    UnityProject::find_for(path)
        .and_then(|project| project.to_project_relative(path))
        .unwrap_or_else(|| path.display().to_string())
}

/// How a command went once it ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// At least one target failed, the others were still processed
    TargetsFailed,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::TargetsFailed => ExitCode::FAILURE,
        }
    }
}

/// Parse arguments, run the command and map the outcome to an exit code
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> GeneratorResult<CommandStatus> {
    let working_directory = env::current_dir().with_io_context("Failed to get current directory")?;
    let file_config = ConfigFile::discover(cli.config.as_deref(), &working_directory)?;

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    // Failures are already reported on stderr by the commands
    let echo_level = if cli.verbose { LevelFilter::Info } else { LevelFilter::Off };
    let log_file = cli.log_file.clone().or_else(|| file_config.log_file.clone());
    match logging::init_logger(log_file, level, echo_level) {
        Ok(path) => log::debug!("Logging to {}", path.display()),
        Err(e) => eprintln!("Failed to initialize logger: {}", e),
    }
    log::info!("uitk-string-gen {} in {}", env!("CARGO_PKG_VERSION"), working_directory.display());

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match cli.command {
        Command::Generate(args) => run_generate(&args, file_config, &mut out, &mut err),
        Command::Names(args) => run_names(&args, file_config, &mut out, &mut err),
    }
}

fn report_failure(
    err: &mut dyn Write,
    target: &GenerationTarget,
    error: &GeneratorError,
) -> GeneratorResult<()> {
    writeln!(err, "{} {}: {}", target.kind, target.asset_path.display(), error)
        .with_io_context("Failed to write to stderr")
}

/// `generate`: write (or with `--dry-run` print) one class per selected asset.
///
/// Results go to `out`, per target failures to `err`.
pub fn run_generate(
    args: &GenerateArgs,
    file_config: ConfigFile,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> GeneratorResult<CommandStatus> {
    let flags = ConfigFile {
        namespace: args.namespace.clone(),
        output_directory: args.output.clone(),
        max_identifier_length: args.max_length,
        verify_syntax: args.no_verify.then_some(false),
        log_file: None,
    };
    let settings = GeneratorSettings::resolve(&file_config.merge(flags));
    let request = GenerationRequest::new(settings, targets_from(args.uss.as_ref(), args.uxml.as_ref()))?;

    let mut status = CommandStatus::Success;
    if args.dry_run {
        for target in request.targets() {
            let rendered = output_path_for(&request, target)
                .and_then(|path| Ok((path, render_target(&request, target, &FsAssetSource)?)));
            match rendered {
                Ok((path, generated)) => {
                    writeln!(out, "// {}", display_path(&path))
                        .and_then(|()| out.write_all(generated.source.as_bytes()))
                        .with_io_context("Failed to write to stdout")?;
                }
                Err(e) => {
                    report_failure(err, target, &e)?;
                    status = CommandStatus::TargetsFailed;
                }
            }
        }
    } else {
        for report in generate(&request, &FsAssetSource) {
            match &report.outcome {
                Ok(file) => writeln!(
                    out,
                    "generated {} ({} constants)",
                    display_path(&file.path),
                    file.constant_count
                )
                .with_io_context("Failed to write to stdout")?,
                Err(e) => {
                    report_failure(err, &report.target, e)?;
                    status = CommandStatus::TargetsFailed;
                }
            }
        }
    }

    Ok(status)
}

/// `names`: list raw names per asset and the identifier each maps to
pub fn run_names(
    args: &NamesArgs,
    file_config: ConfigFile,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> GeneratorResult<CommandStatus> {
    let flags = ConfigFile {
        max_identifier_length: args.max_length,
        ..Default::default()
    };
    let settings = GeneratorSettings::resolve(&file_config.merge(flags));
    let source = FsAssetSource;

    let mut status = CommandStatus::Success;
    for target in targets_from(args.uss.as_ref(), args.uxml.as_ref()) {
        let text = match source.read_asset_text(&target.asset_path) {
            Ok(text) => text,
            Err(e) => {
                report_failure(err, &target, &e)?;
                status = CommandStatus::TargetsFailed;
                continue;
            }
        };

        let found = extract_raw_names(target.kind, &text, &source);
        let raw_names = distinct_names(found.iter().cloned());
        let constants = build_constant_table(&raw_names, settings.max_identifier_length);
        let identifiers: HashMap<&str, &str> = constants
            .iter()
            .map(|entry| (entry.value.as_str(), entry.identifier.as_str()))
            .collect();

        let class_name = target
            .class_name()
            .unwrap_or_else(|e| format!("<{}>", e));
        writeln!(
            out,
            "{} {} -> {} ({} names, {} distinct, {} constants)",
            target.kind,
            display_path(&target.asset_path),
            class_name,
            found.len(),
            raw_names.len(),
            constants.len()
        )
        .with_io_context("Failed to write to stdout")?;
        for raw in &raw_names {
            let line = match identifiers.get(raw.as_str()) {
                Some(identifier) => writeln!(out, "  {:<32} {}", raw, identifier),
                None => writeln!(out, "  {:<32} (skipped)", raw),
            };
            line.with_io_context("Failed to write to stdout")?;
        }
    }

    Ok(status)
}
