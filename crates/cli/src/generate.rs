use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use swaggen_core::{
    DEFAULT_CLIENT_FILE, DEFAULT_CLIENT_NAME, DEFAULT_MODELS_FILE, GeneratorConfig,
    generate_from_path,
};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Swagger/OpenAPI document (JSON or YAML)
    #[arg(short = 's', long = "source", value_name = "PATH")]
    pub source: PathBuf,

    /// Directory receiving the generated files (created if missing)
    #[arg(short = 'd', long = "destination", value_name = "DIR")]
    pub destination: PathBuf,

    /// Name of the generated client interface
    #[arg(
        short = 'n',
        long = "clientName",
        visible_alias = "client-name",
        value_name = "NAME",
        default_value = DEFAULT_CLIENT_NAME
    )]
    pub client_name: String,

    /// Base name of the models file, without extension
    #[arg(long = "models-file", value_name = "NAME", default_value = DEFAULT_MODELS_FILE)]
    pub models_file: String,

    /// Base name of the client file, without extension
    #[arg(long = "client-file", value_name = "NAME", default_value = DEFAULT_CLIENT_FILE)]
    pub client_file: String,
}

impl GenerateArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            client_name: self.client_name.clone(),
            models_file: self.models_file.clone(),
            client_file: self.client_file.clone(),
        }
    }
}

pub fn run(args: GenerateArgs) -> i32 {
    debug!(
        source = %args.source.display(),
        destination = %args.destination.display(),
        client_name = %args.client_name,
        "Starting generation."
    );

    match generate_from_path(&args.source, &args.destination, &args.config()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            1
        }
    }
}

/// Display an error followed by each of its sources.
fn error_chain(err: &dyn Error) -> String {
    let mut parts = Vec::new();
    let mut current: Option<&dyn Error> = Some(err);
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}
