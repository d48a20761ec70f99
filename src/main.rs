//! # Simple Mercari Entry Point
//!
//! Terminal front-end for the storefront view-models.

use anyhow::Result;
use simple_mercari::cmd_args::CommandLineArgs;
use simple_mercari::config::LOG_LEVEL_ENV_VAR;
use simple_mercari::controllers::AppController;
use simple_mercari::{TerminalNotifier, TextRenderer};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cmd_args = CommandLineArgs::parse();
    let app = AppController::new(&cmd_args)?;

    let mut renderer = TextRenderer::new(std::io::stdout());
    let mut notifier = TerminalNotifier::stderr();

    let ok = app
        .run(cmd_args.command(), &mut renderer, &mut notifier)
        .await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
