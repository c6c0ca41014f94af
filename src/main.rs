use anyhow::Context;
use clap::Parser;
use reno_quote::utils::{format::format_money, logger, validation::Validate};
use reno_quote::{
    BuiltinCatalog, CatalogConfig, CatalogSource, CliConfig, Estimator, QuoteError, QuoteRequest,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting reno-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入價目表：指定檔案或內建三種工程級別
    let source: Box<dyn CatalogSource> = match &config.config {
        Some(path) => {
            let catalog_config = CatalogConfig::from_file(path)
                .with_context(|| format!("failed to load catalog file {}", path.display()))?;

            if let Err(e) = catalog_config.validate() {
                tracing::error!("❌ Catalog validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code_for(&e));
            }

            Box::new(catalog_config)
        }
        None => Box::new(BuiltinCatalog),
    };

    let currency = source.currency().to_string();

    if config.list {
        print_listings(source.as_ref(), &currency)?;
        return Ok(());
    }

    let catalog = match source.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to build catalog: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code_for(&e));
        }
    };

    let estimator = Estimator::new(catalog);
    let request = QuoteRequest::new(
        config.category.clone().unwrap_or_default(),
        config.area.clone().unwrap_or_default(),
    );

    match estimator.estimate(&request) {
        Ok(quote) => {
            tracing::info!("✅ Estimate completed");

            if config.format == "json" {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!(
                    "Service: {} ({}/m²)",
                    quote.category.name,
                    format_money(quote.category.unit_price, &currency)
                );
                println!("Area: {} m²", quote.area);
                println!("Estimated total: {}", format_money(quote.total, &currency));
                println!("The final price is determined after an on-site inspection.");
            }
        }
        Err(e) => {
            let e = QuoteError::from(e);
            tracing::error!("❌ Estimate failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code_for(&e));
        }
    }

    Ok(())
}

fn print_listings(source: &dyn CatalogSource, currency: &str) -> anyhow::Result<()> {
    let listings = source
        .listings()
        .context("failed to read catalog listings")?;

    println!("Available services (prices per m²):");
    for listing in listings {
        println!(
            "  {} — {}/m²",
            listing.name,
            format_money(listing.unit_price, currency)
        );
        if let Some(description) = &listing.description {
            println!("      {}", description);
        }
        for feature in &listing.features {
            println!("      - {}", feature);
        }
    }

    Ok(())
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code_for(e: &QuoteError) -> i32 {
    match e.severity() {
        reno_quote::utils::error::ErrorSeverity::Low => 2,      // 輸入錯誤，可重試
        reno_quote::utils::error::ErrorSeverity::Medium => 1,   // 配置錯誤
        reno_quote::utils::error::ErrorSeverity::High => 3,     // 檔案錯誤
        reno_quote::utils::error::ErrorSeverity::Critical => 4, // 系統錯誤
    }
}
