pub mod builtin;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "reno-quote")]
#[command(about = "Renovation price estimator: catalog-driven quotes from the terminal")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML catalog file (built-in catalog when omitted)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Service category name, exactly as listed")]
    pub category: Option<String>,

    #[arg(long, help = "Room area in square meters")]
    pub area: Option<String>,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: String,

    #[arg(long, help = "List available services and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("format", &self.format, &["text", "json"])
    }
}
