use anyhow::{anyhow, Result};
use is_terminal::IsTerminal;

use crate::args::{OutputFormat, PredictArgs};
use crate::context::ExecutionContext;
use crate::output::render_report;
use crate::presentation::map_response;

/// One-shot prediction: validate the flags, call the unified endpoint once,
/// print the mapped result.
pub fn handle(ctx: &ExecutionContext, args: PredictArgs) -> Result<()> {
    let draft = args.to_draft();

    // Validation runs before any service or network setup; a blocked
    // submission must not cost a connection.
    let profile = match draft.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            return Err(anyhow!("validation failed ({} field(s))", errors.len()));
        }
    };

    let mut service = ctx.service()?;
    let runtime = tokio::runtime::Runtime::new()?;
    let response = runtime
        .block_on(service.fetch_unified(&profile))
        .map_err(|e| anyhow!("models unavailable: {}", e))?;

    let vm = map_response(&profile, &response);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => {
            let colored = std::io::stdout().is_terminal();
            print!("{}", render_report(&vm, colored));
        }
    }

    Ok(())
}
