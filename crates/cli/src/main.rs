//! swaggen: generate TypeScript model and client declarations from a
//! Swagger/OpenAPI document.

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod generate;

/// Environment variable holding the log level or a full filter spec.
const LOG_ENV: &str = "SWAGGEN_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "swaggen",
    version,
    about = "Generate TypeScript declarations from a Swagger/OpenAPI document"
)]
struct Cli {
    #[command(flatten)]
    args: generate::GenerateArgs,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    std::process::exit(generate::run(cli.args));
}

fn init_tracing() {
    let crate_root = module_path!();

    // SWAGGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "swaggen_core=debug"
    let filter = match std::env::var(LOG_ENV) {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level},swaggen_core={level}")
        }
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info,swaggen_core=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
