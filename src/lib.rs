pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::builtin::BuiltinCatalog;
pub use config::toml_config::CatalogConfig;
pub use core::estimator::{estimate, Estimator};
pub use core::shared::SharedCatalog;
pub use domain::model::{Catalog, QuoteRequest, QuoteResult, ServiceCategory, ServiceListing};
pub use domain::ports::CatalogSource;
pub use utils::error::{EstimateError, QuoteError, Result};
