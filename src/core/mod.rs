pub mod cart_manager;
pub mod product_filter;
pub mod product_list;
pub mod quantity;
pub mod search;
pub mod storefront;

pub use crate::domain::model::{CartItem, CartState, Price, Product, ProductId, ProductsResponse};
pub use crate::domain::ports::{ConfigProvider, ProductSource};
pub use crate::utils::error::Result;
