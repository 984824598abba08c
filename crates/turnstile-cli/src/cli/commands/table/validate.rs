use anyhow::Result;
use turnstile_core::CapabilityTable;

use crate::cli::args::TableValidateArgs;
use crate::exit_codes;

pub fn run(args: TableValidateArgs) -> Result<i32> {
    match CapabilityTable::from_file(&args.file) {
        Ok(table) => {
            eprintln!(
                "✔ table OK: {} ({} capabilities)",
                args.file.display(),
                table.len()
            );
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("✖ {e}");
            Ok(exit_codes::INVALID_INPUT)
        }
    }
}
