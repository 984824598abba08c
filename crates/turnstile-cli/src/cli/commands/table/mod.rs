pub mod show;
pub mod validate;

use crate::cli::args::{TableArgs, TableCommand};

pub fn run(args: TableArgs) -> anyhow::Result<i32> {
    match args.cmd {
        TableCommand::Validate(a) => validate::run(a),
        TableCommand::Show(a) => show::run(a),
    }
}
