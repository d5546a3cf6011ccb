use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use linkchain::LinkedList;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
use cli::script::{run_script, DEMO_SCRIPT};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only list output. `RUST_LOG` wins over
/// `--log-level` when set.
fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    let mut list = LinkedList::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Demo => run_script(DEMO_SCRIPT, &mut list, &mut out)?,
        Commands::Run { ops } => run_script(ops.as_slice(), &mut list, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
