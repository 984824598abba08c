//! Decode command arguments.

use clap::Args;

#[derive(Args, Clone, Debug)]
pub struct DecodeArgs {
    /// Wire-format method ARN
    pub arn: String,

    /// Print the decoded identifier as JSON
    #[arg(long)]
    pub json: bool,
}
