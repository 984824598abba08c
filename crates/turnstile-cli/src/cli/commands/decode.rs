use anyhow::Result;
use turnstile_core::ResourceArn;

use crate::cli::args::DecodeArgs;
use crate::exit_codes;

pub fn run(args: DecodeArgs) -> Result<i32> {
    let arn = match ResourceArn::parse(&args.arn) {
        Ok(arn) => arn,
        Err(e) => {
            eprintln!("✖ {e}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&arn)?);
    } else {
        println!("region:         {}", arn.region);
        println!("account id:     {}", arn.account_id);
        println!("api id:         {}", arn.api_id);
        println!("stage:          {}", arn.stage);
        println!("http method:    {}", arn.http_method);
        println!("resource:       {}", arn.resource);
        println!("child resource: {}", arn.child_resource);
    }
    Ok(exit_codes::SUCCESS)
}
