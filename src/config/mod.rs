pub mod color_mode;

use crate::utils::logger::Logger;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

pub use color_mode::{ColorModeCommand, ColorModeConfig};

/// Every argument after the program name is a value, so a title such as
/// `--help` or `-v` reaches the validator untouched. Diagnostics are switched
/// through the environment instead: `RUST_LOG` and `NO_COLOR`.
#[derive(Debug, Clone, Parser)]
#[command(name = "validate-pr-title", version)]
#[command(about = "Check a pull-request title against the VIP-NN-NNNN: <summary> convention")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Pull-request title followed by ignored extra arguments
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,

    #[arg(skip)]
    pub no_color: bool,
}

impl CliConfig {
    /// Parses `argv` (program name first). A `--` is inserted ahead of the
    /// user arguments so none of them can be read as a flag or an escape.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("validate-pr-title"));
        let values = argv.map(|arg| arg.to_string_lossy().into_owned());

        let full = std::iter::once(program.to_string_lossy().into_owned())
            .chain(std::iter::once("--".to_string()))
            .chain(values);
        CliConfig::try_parse_from(full)
    }

    /// Parses the process arguments and reads `NO_COLOR`.
    pub fn from_env() -> Result<Self, clap::Error> {
        let mut config = Self::try_parse_args(std::env::args_os())?;
        config.no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Ok(config)
    }

    pub fn title(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// First line of a clap error without its `error: ` prefix.
pub fn parse_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Whether a clap "error" is really a request for help or version output.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Reports a failed argument parse and exits: 0 for help/version, 1 otherwise.
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    if is_informational(&err) {
        let _ = err.print();
        std::process::exit(0);
    }

    if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
        let _ = err.print();
    } else {
        Logger::stdout().error(parse_error_summary(&err), &[]);
    }
    std::process::exit(1);
}
