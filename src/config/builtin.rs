use rust_decimal::Decimal;

use crate::domain::model::{Catalog, ServiceCategory};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Static pricing table used when no catalog file is supplied: the three
/// standard renovation tiers.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn entries() -> Vec<ServiceCategory> {
        vec![
            ServiceCategory {
                name: "Rough".to_string(),
                unit_price: Decimal::from(3500),
            },
            ServiceCategory {
                name: "Pre-finish".to_string(),
                unit_price: Decimal::from(2800),
            },
            ServiceCategory {
                name: "Finish".to_string(),
                unit_price: Decimal::from(4200),
            },
        ]
    }
}

impl CatalogSource for BuiltinCatalog {
    fn catalog(&self) -> Result<Catalog> {
        Catalog::new(Self::entries())
    }

    fn currency(&self) -> &str {
        "₽"
    }
}
