//! Contains structures and functionality for the binary
use std::path::PathBuf;

use lpmln::{translation::mode::DEFAULT_POWER_OF_TEN, TranslationMode};

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `LPMLN_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("LPMLN_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Cli arguments that select the encoding
#[derive(Debug, clap::Args)]
pub(crate) struct TranslationArgs {
    /// Also translate rules without weight
    #[arg(long = "hr")]
    translate_hard_rules: bool,
    /// Mark violated rules with explicit `unsat` atoms
    #[arg(long = "use-unsat")]
    use_unsat: bool,
    /// Guard weak constraints of soft rules with `ext_helper`
    #[arg(long = "two-solve-calls")]
    two_solve_calls: bool,
    /// Multiply weights by 10 to the given power before rounding
    #[arg(long = "power-of-ten", default_value_t = DEFAULT_POWER_OF_TEN, allow_negative_numbers = true)]
    power_of_ten: i32,
}

impl TranslationArgs {
    /// Return the [TranslationMode] selected by these arguments.
    pub(crate) fn mode(&self) -> TranslationMode {
        TranslationMode::default()
            .with_translate_hard_rules(self.translate_hard_rules)
            .with_use_unsat(self.use_unsat)
            .with_two_solve_calls(self.two_solve_calls)
            .with_power_of_ten(self.power_of_ten)
    }
}

/// Rewrites LP^MLN programs into answer set programs with weak constraints
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct CliApp {
    /// One or more LP^MLN program files, translated in the given order
    #[arg(value_parser, required = true)]
    pub(crate) files: Vec<PathBuf>,
    /// File to write the answer set program to (default is standard output)
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
    /// Arguments related to the encoding
    #[command(flatten)]
    pub(crate) translation: TranslationArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}
