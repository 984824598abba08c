use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use turnstile_core::{AuthorizerResponse, CapabilityTable, Effect, PolicyResolver, ResourceArn};

use crate::cli::args::EvaluateArgs;
use crate::exit_codes;

pub fn run(args: EvaluateArgs) -> Result<i32> {
    let table = match load_table(args.table.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("✖ {e:#}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    let requested = match ResourceArn::parse(&args.arn) {
        Ok(arn) => arn,
        Err(e) => {
            eprintln!("✖ {e}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    let held: BTreeSet<String> = args.capabilities.iter().cloned().collect();
    let resolver = PolicyResolver::new(table);
    let verdict = resolver.evaluate(&held, &requested);

    if args.json {
        let response = AuthorizerResponse::from_verdict(&args.principal, &verdict, &requested);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match verdict.effect {
            Effect::Allow => {
                println!("Allow");
                for scope in &verdict.scoped_resources {
                    println!("  {scope}");
                }
            }
            Effect::Deny => println!("Deny"),
        }
    }

    Ok(if verdict.is_allow() {
        exit_codes::SUCCESS
    } else {
        exit_codes::DENY
    })
}

/// Load the table file when given, falling back to the builtin grants.
pub(crate) fn load_table(path: Option<&Path>) -> Result<CapabilityTable> {
    match path {
        Some(path) => CapabilityTable::from_file(path)
            .with_context(|| format!("failed to load capability table {}", path.display())),
        None => Ok(CapabilityTable::builtin()),
    }
}
