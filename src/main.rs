use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use adder_nn::{cli::Cli, session::render, train_adder, Session};

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.train_config();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    render::training_started(&mut out)?;
    let mut progress = Ok(());
    let model = train_adder(&config, |stats| {
        if progress.is_ok() {
            progress = render::epoch(&mut out, stats);
        }
    })
    .context("training failed")?;
    progress.context("failed to write training progress")?;
    render::training_complete(&mut out)?;

    let mut session = Session::new(model);
    session
        .run(io::stdin().lock(), &mut out)
        .context("terminal I/O failed")?;

    Ok(())
}
