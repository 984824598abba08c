use super::super::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Decode(args) => super::decode::run(args),
        Command::Evaluate(args) => super::evaluate::run(args),
        Command::Table(args) => super::table::run(args),
    }
}
