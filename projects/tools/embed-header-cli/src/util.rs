use crate::error::CliError;
use argh::{EarlyExit, FromArgs};
use env_logger::Env;
use std::path::Path;

/// Name shown in usage text when the executable name cannot be determined.
const DEFAULT_COMMAND: &str = "embed-header";

/// Input path, output path, namespace and variable name.
const POSITIONAL_COUNT: usize = 4;

/// Sets up `log` output. Verbosity is controlled with `RUST_LOG`, defaulting to warnings.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();
}

/// Parses the arguments of the current process.
pub fn parse_args<T: FromArgs>() -> Result<T, CliError> {
    let strings: Vec<String> = std::env::args().collect();
    let command = strings
        .first()
        .map(|arg0| command_name(arg0))
        .unwrap_or(DEFAULT_COMMAND);
    let args: Vec<&str> = strings.iter().skip(1).map(String::as_str).collect();

    parse_from(command, &args)
}

/// Parses `args` as if they were passed to `command`.
///
/// Exactly [`POSITIONAL_COUNT`] arguments are accepted, and they are always taken as
/// positionals: `help`, `--help`, `--` or a path starting with `-` is a value, not a flag.
/// Any other count becomes a [`CliError::Usage`] holding the usage text.
pub fn parse_from<T: FromArgs>(command: &str, args: &[&str]) -> Result<T, CliError> {
    if args.len() != POSITIONAL_COUNT {
        return Err(usage_error::<T>(command, args.len()));
    }

    let mut positional = Vec::with_capacity(args.len() + 1);
    positional.push("--");
    positional.extend_from_slice(args);

    T::from_args(&[command], &positional).map_err(|exit| {
        CliError::Usage(format!("{}\n\n{}", exit.output.trim_end(), usage::<T>(command)))
    })
}

fn usage_error<T: FromArgs>(command: &str, given: usize) -> CliError {
    CliError::Usage(format!(
        "Expected {POSITIONAL_COUNT} arguments, got {given}.\n\n{}",
        usage::<T>(command)
    ))
}

/// Full usage text, as argh renders it for `--help`.
fn usage<T: FromArgs>(command: &str) -> String {
    match T::from_args(&[command], &["--help"]) {
        Err(EarlyExit { output, .. }) => output.trim_end().to_string(),
        Ok(_) => String::new(),
    }
}

/// File name of the executable, as argh does for `from_env`.
fn command_name(arg0: &str) -> &str {
    Path::new(arg0)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(arg0)
}
