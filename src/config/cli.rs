use crate::core::ConfigProvider;
use crate::domain::model::ProductId;
use clap::Parser;
use std::convert::Infallible;

pub const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:3000/api/products";

#[derive(Debug, Clone, Parser)]
#[command(name = "small-storefront")]
#[command(about = "Browse a product catalog and manage a shopping cart from the terminal")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Read the catalog from a JSON file instead of the API
    #[arg(long)]
    pub products_file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Only list products whose title contains this text")]
    pub search: Option<String>,

    /// Product ids to add to the cart
    #[arg(long, value_delimiter = ',', value_parser = parse_product_id)]
    pub add: Vec<ProductId>,

    /// Product ids to remove from the cart after adding
    #[arg(long, value_delimiter = ',', value_parser = parse_product_id)]
    pub remove: Vec<ProductId>,

    #[arg(long, default_value = "text", help = "Output format: text, json or csv")]
    pub format: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

// 不走 clap 預設的 From<String>，純數字要變成數字 id
fn parse_product_id(value: &str) -> Result<ProductId, Infallible> {
    value.parse()
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn products_file(&self) -> Option<&str> {
        self.products_file.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_format(&self) -> &str {
        &self.format
    }
}

impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::{validate_path, validate_range, validate_url};

        match &self.products_file {
            Some(path) => validate_path("products_file", path)?,
            None => validate_url("api_endpoint", &self.api_endpoint)?,
        }
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        crate::app::render::OutputFormat::parse("format", &self.format)?;
        Ok(())
    }
}
