mod embed;
mod error;
mod util;

use error::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    util::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            e.exit_code()
        }
    }
}

fn run() -> Result<(), CliError> {
    let cmd = util::parse_args::<embed::EmbedCmd>()?;
    embed::handle_embed_command(cmd)
}
