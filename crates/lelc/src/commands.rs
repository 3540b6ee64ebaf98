//! Command handling for the `lelc` CLI.
//!
//! `parse_args` turns argv into [`Options`], [`run`] scans every file and
//! prints one line per injection. Rendering is split out so tests can check
//! the exact output without touching stdout.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use lel_inject::{find_injections_many, ConfigError, InjectionSpan, LanguageRegistry, ParseError};
use lel_lexer_core::LineOffsetTable;
use thiserror::Error;
use tracing::debug;

/// Malformed command line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing file path")]
    MissingFile,

    #[error("`{0}` expects a value")]
    MissingValue(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub files: Vec<PathBuf>,
    /// TOML language config; the built-in table is used when absent.
    pub languages: Option<PathBuf>,
    /// Add built-in aliases on top of `languages`.
    pub builtin: bool,
}

impl Options {
    /// Build the language registry these options select.
    pub fn registry(&self) -> Result<LanguageRegistry, ConfigError> {
        let Some(path) = &self.languages else {
            return Ok(LanguageRegistry::builtin());
        };
        let mut registry = LanguageRegistry::load(path)?;
        if self.builtin {
            registry.add_builtin();
        }
        Ok(registry)
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Options, ArgsError> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--languages" || arg == "-l" {
            let Some(path) = args.get(i + 1) else {
                return Err(ArgsError::MissingValue(arg.to_owned()));
            };
            options.languages = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(path) = arg.strip_prefix("--languages=") {
            if path.is_empty() {
                return Err(ArgsError::MissingValue("--languages".to_owned()));
            }
            options.languages = Some(PathBuf::from(path));
        } else if arg == "--builtin" {
            options.builtin = true;
        } else if arg.starts_with('-') {
            return Err(ArgsError::UnknownOption(arg.to_owned()));
        } else {
            options.files.push(PathBuf::from(arg));
        }
        i += 1;
    }

    if options.files.is_empty() {
        return Err(ArgsError::MissingFile);
    }
    Ok(options)
}

/// Scan every file and print its injections.
///
/// Returns `false` if any file could not be read or scanned, or the
/// language config failed to load.
pub fn run(options: &Options) -> bool {
    let registry = match options.registry() {
        Ok(registry) => registry,
        Err(err) => {
            eprint!("{}", render_config_error(&err));
            return false;
        }
    };

    let mut ok = true;
    let mut paths = Vec::with_capacity(options.files.len());
    let mut sources = Vec::with_capacity(options.files.len());
    for path in &options.files {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                paths.push(path.as_path());
                sources.push(source);
            }
            Err(err) => {
                eprintln!("error: {}", read_error(path, &err));
                ok = false;
            }
        }
    }

    let results = find_injections_many(&sources, &registry);
    debug!(files = sources.len(), "scanned");

    for ((path, source), result) in paths.iter().zip(&sources).zip(results) {
        let path = path.display().to_string();
        match result {
            Ok(injections) => print!("{}", render_injections(&path, source, &injections)),
            Err(err) => {
                eprint!("{}", render_parse_error(&path, source, &err));
                ok = false;
            }
        }
    }
    ok
}

/// `path:line:col language start..end [ranges]`, one line per injection.
pub fn render_injections(path: &str, source: &str, injections: &[InjectionSpan]) -> String {
    let lines = LineOffsetTable::build(source);
    let mut out = String::new();
    for injection in injections {
        let (line, col) = lines.offset_to_line_col(source, injection.literal.start);
        let _ = writeln!(out, "{path}:{line}:{col} {injection}");
    }
    out
}

/// Error message followed by a ` --> path:line:col` pointer.
pub fn render_parse_error(path: &str, source: &str, err: &ParseError) -> String {
    let (line, col) = LineOffsetTable::build(source).offset_to_line_col(source, err.offset());
    format!("error: {err}\n --> {path}:{line}:{col}\n")
}

/// Config error, with the I/O cause for unreadable files.
pub fn render_config_error(err: &ConfigError) -> String {
    let mut out = format!("error: {err}\n");
    if let ConfigError::Io { source, .. } = err {
        let _ = writeln!(out, "  caused by: {source}");
    }
    out
}

fn read_error(path: &Path, err: &std::io::Error) -> String {
    let path = path.display();
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
