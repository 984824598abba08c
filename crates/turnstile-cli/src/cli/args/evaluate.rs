//! Evaluate command arguments.

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Clone, Debug)]
pub struct EvaluateArgs {
    /// Wire-format method ARN of the requested operation
    pub arn: String,

    /// Capability held by the caller (repeatable)
    #[arg(short = 'c', long = "capability", value_name = "NAME")]
    pub capabilities: Vec<String>,

    /// Capability table file (YAML); defaults to the builtin grants
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Principal id recorded on an Allow response
    #[arg(long, default_value = "offline-caller")]
    pub principal: String,

    /// Print the full authorizer response as JSON
    #[arg(long)]
    pub json: bool,
}
