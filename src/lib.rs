pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{FileProductSource, HttpProductSource};
pub use crate::app::render::OutputFormat;
pub use crate::core::{
    cart_manager::CartManager, product_filter::filter_products, product_list::ProductList,
    quantity::QuantityControl, search::SearchInput, storefront::Storefront,
};
pub use crate::domain::model::{CartItem, CartState, Price, Product, ProductId, ProductsResponse};
pub use crate::domain::ports::{ConfigProvider, ProductSource};
pub use crate::utils::error::{Result, StorefrontError};
