use crate::args::{Cli, Commands};
use crate::context::ExecutionContext;
use crate::handlers;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.api_url, cli.config);

    match cli.command {
        // The dashboard owns the terminal in raw mode; tracing output would
        // tear the screen, so it is only installed for one-shot commands.
        None | Some(Commands::Dashboard) => handlers::dashboard::handle(&ctx),

        Some(Commands::Predict(args)) => {
            init_tracing();
            handlers::predict::handle(&ctx, args)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
