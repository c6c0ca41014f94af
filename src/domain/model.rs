use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_decimal, validate_unique_names};

/// One pricing tier: a unique service name and its price per square meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    pub unit_price: Decimal,
}

/// The priced services available for estimation.
///
/// Ordered for display only; lookup is by exact name. Construction enforces
/// the invariants (non-empty, unique names, positive prices), so a `Catalog`
/// in hand is always valid. Callers own it; the estimator only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<ServiceCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<ServiceCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(QuoteError::MissingConfigError {
                field: "services".to_string(),
            });
        }

        for category in &categories {
            validate_non_empty_string("services.name", &category.name)?;
            validate_positive_decimal("services.unit_price", category.unit_price)?;
        }

        validate_unique_names("services.name", categories.iter().map(|c| c.name.as_str()))?;

        Ok(Self { categories })
    }

    /// First entry whose name equals `name` exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A quote request as submitted, before any validation.
///
/// Both fields are raw text (form input): the estimator decides whether they
/// parse, not the constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub category: String,
    pub area: String,
}

impl QuoteRequest {
    pub fn new(category: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            area: area.into(),
        }
    }
}

/// A computed, non-binding price estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    /// The matched category, echoed back for traceability.
    pub category: ServiceCategory,
    /// Normalized area in square meters.
    pub area: Decimal,
    /// `area * unit_price`, rounded half-up to 2 decimal places.
    pub total: Decimal,
}

/// Display-only description of one service, for catalog listings.
///
/// The estimator never reads these fields; pricing identity lives in
/// `ServiceCategory` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceListing {
    pub name: String,
    pub unit_price: Decimal,
    pub description: Option<String>,
    pub features: Vec<String>,
}
