#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "module-framework")]
#[command(about = "Decode a module request and inspect what a module would receive")]
pub struct CliConfig {
    #[arg(long, help = "Request document (YAML) with project, stack, app and layers")]
    pub request: String,

    #[arg(long, help = "Adapter configuration (TOML)")]
    pub config: Option<String>,

    #[arg(long, help = "Run the built-in echo module and print the decoded response")]
    pub generate: bool,

    #[arg(long, default_value = "yaml", help = "Output format: yaml or json")]
    pub output: String,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("request", &self.request)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        validate_one_of("output", &self.output, &["yaml", "json"])?;
        Ok(())
    }
}
