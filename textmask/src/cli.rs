// textmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the textmask
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "textmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask, unmask and validate formatted text",
    long_about = "textmask formats raw values (phone numbers, document numbers, card numbers, amounts, dates) into their display form, recovers raw values from display strings, and checks whether a value is complete for its mask.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `textmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Formats raw input into its display value.
    #[command(about = "Formats raw input into its display value.")]
    Mask(MaskArgs),

    /// Recovers the raw value from a display value.
    #[command(about = "Recovers the raw value from a display value.")]
    Unmask(MaskArgs),

    /// Checks whether the input is complete for its mask. Exits with status 1 otherwise.
    #[command(about = "Checks whether the input is complete for its mask (exit status 1 if not).")]
    Validate(MaskArgs),

    /// Lists the named masks available.
    #[command(about = "Lists the named masks available.")]
    List(ListArgs),
}

/// Arguments shared by `mask`, `unmask` and `validate`.
#[derive(Args, Debug, Clone, Default)]
pub struct MaskArgs {
    /// Value to process. Reads stdin line by line when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Mask type identifier (e.g. custom, cpf, money, datetime).
    #[arg(long = "type", short = 't', value_name = "TYPE", help = "Mask type identifier (e.g. custom, cpf, money, datetime).")]
    pub mask_type: Option<String>,

    /// Named mask definition from the built-in or user configuration.
    #[arg(long, short = 'n', value_name = "NAME", conflicts_with = "mask_type", help = "Use a named mask definition.")]
    pub name: Option<String>,

    /// Pattern for custom masks; implies `--type custom` when no type is given.
    #[arg(long, short = 'p', value_name = "PATTERN", help = "Pattern for custom masks, e.g. '(999) 999-9999'.")]
    pub pattern: Option<String>,

    /// Handler options as a JSON object.
    #[arg(long, value_name = "JSON", help = "Handler options as a JSON object, e.g. '{\"precision\": 3}'.")]
    pub options: Option<String>,

    /// Mask configuration (YAML) merged over the built-in masks: a file path,
    /// or a name looked up as `<name>.yaml` in the config directories.
    #[arg(long, value_name = "FILE_OR_NAME", env = "TEXTMASK_CONFIG", help = "Mask configuration file (YAML) path, or a name looked up in the config directories.")]
    pub config: Option<String>,

    /// Print display, raw value and completeness as JSON.
    #[arg(long, help = "Print display, raw value and completeness as JSON.")]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Mask configuration (YAML) merged over the built-in masks: a file path,
    /// or a name looked up as `<name>.yaml` in the config directories.
    #[arg(long, value_name = "FILE_OR_NAME", env = "TEXTMASK_CONFIG", help = "Mask configuration file (YAML) path, or a name looked up in the config directories.")]
    pub config: Option<String>,
}
