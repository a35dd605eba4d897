use embed_header::EmbedError;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments. Holds the text to show the user.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Embed(#[from] EmbedError),
}

impl CliError {
    /// Prints the error where the user expects it: usage goes to stdout, failures to stderr.
    pub fn report(&self) {
        match self {
            CliError::Usage(usage) => println!("{usage}"),
            CliError::Embed(e) => eprintln!("Error: {e}"),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
