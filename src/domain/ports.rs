use crate::domain::model::{Catalog, ServiceListing};
use crate::utils::error::Result;

/// Supplies the pricing catalog: a configuration file, a static table, or
/// anything else that can produce a validated `Catalog` before the first
/// estimate.
pub trait CatalogSource: Send + Sync {
    fn catalog(&self) -> Result<Catalog>;

    fn currency(&self) -> &str;

    /// Catalog entries with their display metadata, for listings. Sources
    /// without display copy fall back to name and price only.
    fn listings(&self) -> Result<Vec<ServiceListing>> {
        Ok(self
            .catalog()?
            .categories()
            .iter()
            .map(|c| ServiceListing {
                name: c.name.clone(),
                unit_price: c.unit_price,
                description: None,
                features: Vec::new(),
            })
            .collect())
    }
}
