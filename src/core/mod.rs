pub mod estimator;
pub mod shared;

pub use crate::domain::model::{Catalog, QuoteRequest, QuoteResult, ServiceCategory};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
