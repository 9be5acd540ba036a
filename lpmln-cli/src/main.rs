/*!
  Binary for the CLI of the LP^MLN translator: lpmln
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod cli;
pub mod error;

use std::{
    fs::{read_to_string, File},
    io::{BufWriter, Write},
    path::Path,
};

use clap::Parser;
use cli::CliApp;
use colored::Colorize;
use error::CliError;
use lpmln::{
    parser::parse_program, rule_model::program::Program, Error, RuleTransformer,
};

/// Print `error` together with an excerpt of `input`.
fn report_error(error: Error, filename: &str, input: &str) {
    if let Err(io_error) = error.eprint(filename, input) {
        log::warn!("unable to print error report: {io_error}");
        log::error!("{error}");
    }
}

/// Write `program` to `output` or to standard output if no file is given.
fn write_program(program: &Program, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let filename = path.display().to_string();
            let file = File::create(path).map_err(|error| CliError::IoWriting {
                error,
                filename: filename.clone(),
            })?;

            let mut writer = BufWriter::new(file);
            write!(writer, "{program}")
                .and_then(|_| writer.flush())
                .map_err(|error| CliError::IoWriting { error, filename })
        }
        None => {
            let mut writer = std::io::stdout().lock();
            write!(writer, "{program}")?;
            writer.flush()?;

            Ok(())
        }
    }
}

fn run(cli: CliApp) -> Result<(), CliError> {
    let mode = cli.translation.mode();
    log::debug!("Translation mode: {mode:?}");

    let mut transformer = RuleTransformer::new(mode);
    let mut output = Program::default();

    for file in &cli.files {
        let filename = file.display().to_string();
        log::info!("Translating {filename} ...");

        let input = read_to_string(file).map_err(|error| CliError::IoReading {
            error,
            filename: filename.clone(),
        })?;

        let program = parse_program(&input).map_err(|error| {
            report_error(error.into(), &filename, &input);
            CliError::ProgramParsing {
                filename: filename.clone(),
            }
        })?;
        log::trace!("{program:?}");

        transformer
            .translate_program(program, &mut output)
            .map_err(|error| {
                report_error(error.into(), &filename, &input);
                CliError::ProgramTranslation {
                    filename: filename.clone(),
                }
            })?;
    }

    log::info!(
        "Translation done, {} statements after {} indexed rules",
        output.len(),
        transformer.rule_index()
    );

    write_program(&output, cli.output.as_deref())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Program files: {:?}", cli.files);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
