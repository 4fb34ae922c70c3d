// crates/tag-gate-cli/src/main.rs
// ============================================================================
// Module: Tag Gate CLI Entry Point
// Description: Command dispatcher for Tag Gate config, tag, and eval workflows.
// Purpose: Inspect and edit tag-gate.toml and dry-run gate decisions offline.
// Dependencies: clap, serde_json, tag-gate-config, tag-gate-core, tag-gate-sink, thiserror.
// ============================================================================

//! ## Overview
//! The Tag Gate CLI validates and normalizes `tag-gate.toml`, edits its tag
//! list, and evaluates single log calls against it. All user-facing strings
//! are routed through the message catalog. `eval` never fails on a missing or
//! broken config: it falls back to the all-enabled default and says so on
//! stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use tag_gate_cli::t;
use tag_gate_config::TagGateConfig;
use tag_gate_config::config_toml_example;
use tag_gate_config::resolve_path;
use tag_gate_core::Decision;
use tag_gate_core::GateConfig;
use tag_gate_core::LogLevel;
use tag_gate_core::LogRequest;
use tag_gate_core::LogSink;
use tag_gate_core::StaticConfigSource;
use tag_gate_core::Tag;
use tag_gate_core::TagError;
use tag_gate_core::TagLogger;
use tag_gate_sink::JsonLinesSink;
use tag_gate_sink::NoopSink;
use tag_gate_sink::TextSink;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "tag-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Tag registry utilities.
    Tags {
        /// Selected tags subcommand.
        #[command(subcommand)]
        command: TagsCommand,
    },
    /// Evaluate one log call against the configuration.
    Eval(EvalCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Tag Gate configuration file.
    Validate(ConfigValidateCommand),
    /// Drop blank and duplicate tags, optionally adding default tags.
    Normalize(ConfigNormalizeCommand),
    /// Print the canonical example configuration.
    Example,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Treat duplicate or blank tag names as errors.
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,
}

/// Arguments for `config normalize`.
#[derive(Args, Debug)]
struct ConfigNormalizeCommand {
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append built-in default tags that are absent.
    #[arg(long, action = ArgAction::SetTrue)]
    add_defaults: bool,
    /// Write the result back instead of printing it.
    #[arg(long, action = ArgAction::SetTrue)]
    write: bool,
}

/// Tags subcommands.
#[derive(Subcommand, Debug)]
enum TagsCommand {
    /// List configured tags as JSON.
    List(TagsListCommand),
    /// Add a tag and write the config back.
    Add(TagsAddCommand),
    /// Remove a tag and write the config back.
    Remove(TagsRemoveCommand),
}

/// Arguments for `tags list`.
#[derive(Args, Debug)]
struct TagsListCommand {
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `tags add`.
#[derive(Args, Debug)]
struct TagsAddCommand {
    /// Tag name.
    #[arg(value_name = "NAME")]
    name: String,
    /// Disable info messages for the tag under an explicit gate.
    #[arg(long, action = ArgAction::SetTrue)]
    no_info: bool,
    /// Disable warning messages for the tag under an explicit gate.
    #[arg(long, action = ArgAction::SetTrue)]
    no_warning: bool,
    /// Disable error messages for the tag under an explicit gate.
    #[arg(long, action = ArgAction::SetTrue)]
    no_error: bool,
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl TagsAddCommand {
    /// Returns true when the command disables `level` for the new tag.
    const fn disables(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Info => self.no_info,
            LogLevel::Warning => self.no_warning,
            LogLevel::Error => self.no_error,
        }
    }
}

/// Arguments for `tags remove`.
#[derive(Args, Debug)]
struct TagsRemoveCommand {
    /// Tag name.
    #[arg(value_name = "NAME")]
    name: String,
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `eval`.
#[derive(Args, Debug)]
struct EvalCommand {
    /// Message severity.
    #[arg(long, value_enum)]
    level: LevelArg,
    /// Optional tag name.
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,
    /// Optional origin name used for the message prefix.
    #[arg(long, value_name = "ORIGIN")]
    origin: Option<String>,
    /// Optional config file path (defaults to tag-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Also deliver the resulting records to stderr in this format.
    #[arg(long, value_enum, default_value_t = RecordsFormat::None)]
    records: RecordsFormat,
    /// Message text.
    #[arg(value_name = "MESSAGE")]
    message: String,
}

/// Severity argument.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LevelArg {
    /// Info level.
    Info,
    /// Warning level.
    Warning,
    /// Error level.
    Error,
}

impl From<LevelArg> for LogLevel {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Info => Self::Info,
            LevelArg::Warning => Self::Warning,
            LevelArg::Error => Self::Error,
        }
    }
}

/// Record output format for `eval`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RecordsFormat {
    /// Do not write records.
    None,
    /// `[level] text` lines.
    Text,
    /// JSON lines.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Tags {
            command,
        } => command_tags(command),
        Commands::Eval(command) => command_eval(&command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Normalize(command) => command_config_normalize(&command),
        ConfigCommand::Example => {
            write_stdout_bytes(config_toml_example().as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let diagnostics = config.diagnostics();
    for diagnostic in &diagnostics {
        write_stderr_line(&t!("config.validate.diagnostic", diagnostic = diagnostic))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    if command.strict && !diagnostics.is_empty() {
        return Err(CliError::new(t!(
            "config.validate.strict_failed",
            count = diagnostics.len()
        )));
    }
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config normalize command.
fn command_config_normalize(command: &ConfigNormalizeCommand) -> CliResult<ExitCode> {
    let path = resolve_config_path(command.config.as_deref())?;
    let mut config = load_config(Some(&path))?;
    let report = config.normalize(command.add_defaults);
    if command.write {
        save_config(&config, &path)?;
        write_stdout_line(&t!(
            "config.normalize.written",
            path = path.display(),
            removed = report.removed,
            added = report.added
        ))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    } else {
        let rendered = config
            .to_toml_string()
            .map_err(|err| CliError::new(t!("config.render_failed", error = err)))?;
        write_stdout_bytes(rendered.as_bytes())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Tags Commands
// ============================================================================

/// Dispatches tags subcommands.
fn command_tags(command: TagsCommand) -> CliResult<ExitCode> {
    match command {
        TagsCommand::List(command) => {
            let config = load_config(command.config.as_deref())?;
            write_json(&config.tags)?;
            Ok(ExitCode::SUCCESS)
        }
        TagsCommand::Add(command) => command_tags_add(&command),
        TagsCommand::Remove(command) => command_tags_remove(&command),
    }
}

/// Executes the tags add command.
fn command_tags_add(command: &TagsAddCommand) -> CliResult<ExitCode> {
    let path = resolve_config_path(command.config.as_deref())?;
    let config = if path.is_file() { load_config(Some(&path))? } else { TagGateConfig::default() };
    let tag = tag_from_command(command)
        .map_err(|err| CliError::new(t!("tags.invalid_name", error = err)))?;
    let updated = add_tag(&config, tag).ok_or_else(|| {
        CliError::new(t!("tags.add.exists", name = command.name, path = path.display()))
    })?;
    save_config(&updated, &path)?;
    write_stdout_line(&t!("tags.add.ok", name = command.name, path = path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Builds the tag described by `tags add`, clearing each `--no-<level>` flag.
fn tag_from_command(command: &TagsAddCommand) -> Result<Tag, TagError> {
    let mut tag = Tag::new(command.name.as_str())?;
    for level in LogLevel::ALL {
        if command.disables(level) {
            tag.set_allows(level, false);
        }
    }
    Ok(tag)
}

/// Executes the tags remove command.
fn command_tags_remove(command: &TagsRemoveCommand) -> CliResult<ExitCode> {
    let path = resolve_config_path(command.config.as_deref())?;
    let config = load_config(Some(&path))?;
    let updated = remove_tag(&config, &command.name).ok_or_else(|| {
        CliError::new(t!("tags.remove.missing", name = command.name, path = path.display()))
    })?;
    save_config(&updated, &path)?;
    write_stdout_line(&t!("tags.remove.ok", name = command.name, path = path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Returns `config` with `tag` appended, or `None` when the name is taken.
fn add_tag(config: &TagGateConfig, tag: Tag) -> Option<TagGateConfig> {
    let mut gate = config.to_gate_config();
    if gate.registry.contains_name(&tag.name) {
        return None;
    }
    gate.registry.add(tag).then(|| TagGateConfig::from_gate_config(&gate))
}

/// Returns `config` without the first tag named `name`, or `None` when absent.
fn remove_tag(config: &TagGateConfig, name: &str) -> Option<TagGateConfig> {
    let mut gate = config.to_gate_config();
    gate.registry.remove(name).then(|| TagGateConfig::from_gate_config(&gate))
}

// ============================================================================
// SECTION: Eval Command
// ============================================================================

/// Executes the eval command.
fn command_eval(command: &EvalCommand) -> CliResult<ExitCode> {
    let (gate, warning) = load_gate_or_default(command.config.as_deref());
    if let Some(warning) = warning {
        write_stderr_line(&warning).map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    let decision = evaluate_command(gate, command, records_sink(command.records))?;
    write_json(&decision)?;
    Ok(ExitCode::SUCCESS)
}

/// Loads the gate config, returning the default and a warning on failure.
fn load_gate_or_default(path: Option<&Path>) -> (GateConfig, Option<String>) {
    match TagGateConfig::load(path) {
        Ok(config) => (config.to_gate_config(), None),
        Err(err) => (GateConfig::default(), Some(t!("eval.config.fallback", error = err))),
    }
}

/// Builds the record sink for `format`.
fn records_sink(format: RecordsFormat) -> Box<dyn LogSink + Send + Sync> {
    match format {
        RecordsFormat::None => Box::new(NoopSink),
        RecordsFormat::Text => Box::new(TextSink::stderr()),
        RecordsFormat::Json => Box::new(JsonLinesSink::new(std::io::stderr())),
    }
}

/// Runs the eval request through a logger bound to `gate` and `sink`.
fn evaluate_command(
    gate: GateConfig,
    command: &EvalCommand,
    sink: Box<dyn LogSink + Send + Sync>,
) -> CliResult<Decision> {
    let logger = TagLogger::new(StaticConfigSource::new(gate), sink);
    let mut request = LogRequest::new(command.level.into(), &command.message);
    if let Some(tag) = command.tag.as_deref() {
        request = request.with_tag(tag);
    }
    if let Some(origin) = command.origin.as_deref() {
        request = request.with_origin(origin);
    }
    logger.log(&request).map_err(|err| CliError::new(t!("eval.sink_failed", error = err)))
}

// ============================================================================
// SECTION: Config Helpers
// ============================================================================

/// Resolves the effective config path.
fn resolve_config_path(path: Option<&Path>) -> CliResult<PathBuf> {
    resolve_path(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Loads and validates a config file.
fn load_config(path: Option<&Path>) -> CliResult<TagGateConfig> {
    TagGateConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Writes a config file.
fn save_config(config: &TagGateConfig, path: &Path) -> CliResult<()> {
    config
        .save(path)
        .map_err(|err| CliError::new(t!("config.save_failed", path = path.display(), error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes pretty JSON to stdout.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
