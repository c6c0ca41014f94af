use crate::utils::error::{QuoteError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_decimal(field_name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("services.name", "Finish").is_ok());
        assert!(validate_non_empty_string("services.name", "").is_err());
        assert!(validate_non_empty_string("services.name", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_decimal() {
        assert!(validate_positive_decimal("services.unit_price", dec!(3500)).is_ok());
        assert!(validate_positive_decimal("services.unit_price", dec!(0)).is_err());
        assert!(validate_positive_decimal("services.unit_price", dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("services.name", ["Rough", "Finish"]).is_ok());
        assert!(validate_unique_names("services.name", ["Rough", "Rough"]).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "text", &["text", "json"]).is_ok());
        assert!(validate_one_of("format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("format", "yaml", &["text", "json"]).is_err());
    }
}
