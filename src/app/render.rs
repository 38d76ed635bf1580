use crate::domain::model::{CartState, Product};
use crate::utils::error::{Result, StorefrontError};

pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["text", "json", "csv"];

    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(StorefrontError::InvalidConfigValueError {
                field: field.to_string(),
                value: value.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VALID.join(", ")
                ),
            }),
        }
    }
}

pub fn render_products(products: &[&Product], label: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![label.to_string()];
            for product in products {
                lines.push(format!("  [{}] {} - {}", product.id, product.title, product.price));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(products)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "title", "price"])?;
            for product in products {
                writer.write_record([
                    product.id.to_string(),
                    product.title.clone(),
                    product.price.to_string(),
                ])?;
            }
            finish_csv(writer)
        }
    }
}

pub fn render_cart(state: &CartState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let visibility = if state.open { "open" } else { "hidden" };
            let mut lines = vec![format!("Cart ({})", visibility)];
            if state.items.is_empty() {
                lines.push(format!("  {}", EMPTY_CART_MESSAGE));
            }
            for item in &state.items {
                lines.push(format!(
                    "  [{}] {} - {} x{}",
                    item.product.id, item.product.title, item.product.price, item.quantity
                ));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "title", "price", "quantity"])?;
            for item in &state.items {
                writer.write_record([
                    item.product.id.to_string(),
                    item.product.title.clone(),
                    item.product.price.to_string(),
                    item.quantity.to_string(),
                ])?;
            }
            finish_csv(writer)
        }
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| StorefrontError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| StorefrontError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
