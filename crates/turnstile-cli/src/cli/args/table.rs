//! Table command arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Args, Clone, Debug)]
pub struct TableArgs {
    #[command(subcommand)]
    pub cmd: TableCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum TableCommand {
    /// Load and validate a capability table file
    Validate(TableValidateArgs),

    /// Print the effective capability table as YAML
    Show(TableShowArgs),
}

#[derive(Args, Clone, Debug)]
pub struct TableValidateArgs {
    /// Capability table file (YAML)
    pub file: PathBuf,
}

#[derive(Args, Clone, Debug)]
pub struct TableShowArgs {
    /// Capability table file (YAML); defaults to the builtin grants
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}
