use clap::{Parser, Subcommand};

pub mod decode;
pub mod evaluate;
pub mod table;
pub use decode::*;
pub use evaluate::*;
pub use table::*;

#[derive(Parser)]
#[command(
    name = "turnstile",
    version,
    about = "Gateway authorization decision engine — decode method ARNs and evaluate capability grants offline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a wire-format method ARN into its fields
    Decode(DecodeArgs),
    /// Evaluate a request against a capability table
    Evaluate(EvaluateArgs),
    /// Inspect and validate capability tables
    Table(TableArgs),
}
