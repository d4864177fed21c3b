use std::error::Error;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use imgcrypt_core::ImgCryptError;

use crate::cli::{CliArgs, Mode};

mod cli;
mod commands;

pub type CliResult<T> = std::result::Result<T, ImgCryptError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.options();
    let result = match args.mode() {
        Some(Mode::Encode(encode)) => encode.run(options),
        Some(Mode::Decode(decode)) => decode.run(),
        None => {
            let _ = CliArgs::command().print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(e: &ImgCryptError) {
    log::debug!("{e:?}");

    if e.is_corrupted_artifact() {
        eprintln!("Failed: the image may be corrupted or was not produced by this tool.");
    }
    eprintln!("Error: {e}");

    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
