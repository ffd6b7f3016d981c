//! Generation settings.

/// Default name of the generated client interface.
pub const DEFAULT_CLIENT_NAME: &str = "ApiClient";
/// Default base name of the models file.
pub const DEFAULT_MODELS_FILE: &str = "models";
/// Default base name of the client file.
pub const DEFAULT_CLIENT_FILE: &str = "client";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the generated client interface.
    pub client_name: String,
    /// Base name (without `.ts`) of the models file; also the client's import path.
    pub models_file: String,
    /// Base name (without `.ts`) of the client file.
    pub client_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            models_file: DEFAULT_MODELS_FILE.to_string(),
            client_file: DEFAULT_CLIENT_FILE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// File name of the models output.
    pub fn models_file_name(&self) -> String {
        format!("{}.ts", self.models_file)
    }

    /// File name of the client output.
    pub fn client_file_name(&self) -> String {
        format!("{}.ts", self.client_file)
    }
}
