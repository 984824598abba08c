use anyhow::Result;

use crate::cli::args::TableShowArgs;
use crate::cli::commands::evaluate::load_table;
use crate::exit_codes;

pub fn run(args: TableShowArgs) -> Result<i32> {
    let table = match load_table(args.table.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("✖ {e:#}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };
    print!("{}", table.to_yaml()?);
    Ok(exit_codes::SUCCESS)
}
