use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::model::{Catalog, QuoteRequest, QuoteResult};
use crate::utils::error::EstimateError;

/// Compute a price estimate for one request against a catalog.
///
/// Pure: no I/O, no mutation, no dependence on catalog order or any previous
/// call. Failures are checked in a fixed order, first match wins:
/// missing/unparseable fields, then a non-positive or non-finite area, then an
/// unmatched category name.
pub fn estimate(
    catalog: &Catalog,
    request: &QuoteRequest,
) -> std::result::Result<QuoteResult, EstimateError> {
    if request.category.trim().is_empty() {
        return Err(EstimateError::MissingField { field: "category" });
    }

    let raw_area = request.area.trim();
    if raw_area.is_empty() {
        return Err(EstimateError::MissingField { field: "area" });
    }

    // "NaN" and "inf" parse as floats, so they fall through to the area check
    // below instead of counting as missing.
    let area: f64 = raw_area
        .parse()
        .map_err(|_| EstimateError::MissingField { field: "area" })?;

    if !area.is_finite() || area <= 0.0 {
        return Err(EstimateError::InvalidArea {
            value: raw_area.to_string(),
        });
    }

    let area = Decimal::from_f64(area).ok_or_else(|| EstimateError::InvalidArea {
        value: raw_area.to_string(),
    })?;

    let category = catalog
        .find(&request.category)
        .ok_or_else(|| EstimateError::UnknownCategory {
            category: request.category.clone(),
        })?;

    // Round to the smallest currency subunit, half away from zero.
    let total = (area * category.unit_price)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(QuoteResult {
        category: category.clone(),
        area,
        total,
    })
}

/// Thin engine over `estimate` that owns the catalog and logs each request.
pub struct Estimator {
    catalog: Catalog,
}

impl Estimator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn estimate(
        &self,
        request: &QuoteRequest,
    ) -> std::result::Result<QuoteResult, EstimateError> {
        tracing::debug!(
            "Estimating: category='{}', area='{}'",
            request.category,
            request.area
        );

        let result = estimate(&self.catalog, request);

        match &result {
            Ok(quote) => tracing::debug!("Estimate total: {}", quote.total),
            Err(e) => tracing::debug!("Estimate rejected: {}", e),
        }

        result
    }
}
