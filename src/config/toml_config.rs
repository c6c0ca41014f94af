use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::{Catalog, ServiceCategory, ServiceListing};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_decimal, validate_unique_names, Validate,
};

const DEFAULT_CURRENCY: &str = "₽";

/// Catalog configuration loaded from a TOML file.
///
/// Pricing identity (name + unit price) and display copy (descriptions,
/// feature lists) live side by side in the file, but `catalog()` strips the
/// display fields so the estimator only ever sees pure pricing data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub company: CompanyConfig,
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub unit_price: Decimal,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COMPANY_PHONE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("company.name", &self.company.name)?;

        if self.services.is_empty() {
            return Err(QuoteError::MissingConfigError {
                field: "services".to_string(),
            });
        }

        for entry in &self.services {
            validate_non_empty_string("services.name", &entry.name)?;
            validate_positive_decimal("services.unit_price", entry.unit_price)?;
        }

        validate_unique_names("services.name", self.services.iter().map(|e| e.name.as_str()))?;

        Ok(())
    }
}

impl CatalogSource for CatalogConfig {
    fn catalog(&self) -> Result<Catalog> {
        Catalog::new(
            self.services
                .iter()
                .map(|entry| ServiceCategory {
                    name: entry.name.clone(),
                    unit_price: entry.unit_price,
                })
                .collect(),
        )
    }

    fn currency(&self) -> &str {
        self.company.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    fn listings(&self) -> Result<Vec<ServiceListing>> {
        Ok(self
            .services
            .iter()
            .map(|entry| ServiceListing {
                name: entry.name.clone(),
                unit_price: entry.unit_price,
                description: entry.description.clone(),
                features: entry.features.clone().unwrap_or_default(),
            })
            .collect())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
