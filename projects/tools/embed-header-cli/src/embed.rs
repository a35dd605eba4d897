use crate::error::CliError;
use argh::FromArgs;
use bytesize::ByteSize;
use embed_header::identifier::{is_valid_identifier, is_valid_namespace};
use embed_header::{embed_file, EmbedTarget, HeaderLayout};
use log::{info, warn};
use std::{path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Embed a binary file into a C++ header as a constexpr unsigned char array
pub struct EmbedCmd {
    /// file whose bytes are embedded
    #[argh(positional)]
    pub input: PathBuf,

    /// header to write, missing directories are created
    #[argh(positional)]
    pub output: PathBuf,

    /// namespace wrapping the declarations
    #[argh(positional)]
    pub namespace: String,

    /// name of the array, the byte count is declared as <variable>_len
    #[argh(positional)]
    pub variable: String,
}

pub fn handle_embed_command(cmd: EmbedCmd) -> Result<(), CliError> {
    warn_on_invalid_identifiers(&cmd.namespace, &cmd.variable);

    let start = Instant::now();
    let report = embed_file(
        &cmd.input,
        &cmd.output,
        &EmbedTarget::new(&cmd.namespace, &cmd.variable),
        &HeaderLayout::new(),
    )?;

    info!(
        "Wrote {} tokens ({}) in {:.2?}",
        report.token_count,
        ByteSize(report.output_len as u64),
        start.elapsed()
    );
    println!(
        "Embedded {} from {} into {}",
        ByteSize(report.input_len as u64),
        cmd.input.display(),
        cmd.output.display()
    );
    Ok(())
}

/// Identifiers are written verbatim, so a bad one only surfaces when the header is compiled.
fn warn_on_invalid_identifiers(namespace: &str, variable: &str) {
    if !is_valid_namespace(namespace) {
        warn!("{namespace:?} is not a valid C++ namespace name, the header will not compile");
    }
    if !is_valid_identifier(variable) {
        warn!("{variable:?} is not a valid C++ identifier, the header will not compile");
    }
}
