use clap::Parser;
use std::env;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gemprobe::app;
use gemprobe::cli::Args;
use gemprobe::config::API_KEY_ENV;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stdout is reserved for the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let code = app::run(&args, env::var(API_KEY_ENV).ok(), &mut stdout, &mut stderr).await;
    ExitCode::from(code)
}
