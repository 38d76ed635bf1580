use crate::domain::model::{CartItem, CartState, Product, ProductId};

/// 購物車狀態的唯一擁有者。
///
/// 所有操作都是同步且不會失敗的；找不到的 id 一律視為 no-op。
/// 每個操作都回傳新的 [`CartState`] 快照，呼叫端無法直接改動內部狀態。
#[derive(Debug, Default)]
pub struct CartManager {
    state: CartState,
}

impl CartManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前狀態的快照 (`getState`)
    pub fn state(&self) -> CartState {
        self.state.clone()
    }

    pub fn add_product(&mut self, product: &Product) -> CartState {
        if self.product_is_in_the_cart(product) {
            tracing::debug!("Product {} already in the cart, skipping", product.id);
        } else {
            self.state.items.push(CartItem::new(product.clone()));
            tracing::debug!(
                "Added product {} to the cart ({} items)",
                product.id,
                self.state.items.len()
            );
        }
        self.state()
    }

    pub fn remove_product(&mut self, product_id: &ProductId) -> CartState {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.product_id() != product_id);
        if self.state.items.len() < before {
            tracing::debug!("Removed product {} from the cart", product_id);
        }
        self.state()
    }

    pub fn product_is_in_the_cart(&self, product: &Product) -> bool {
        self.contains(&product.id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.state
            .items
            .iter()
            .any(|item| item.product_id() == product_id)
    }

    pub fn has_products(&self) -> bool {
        !self.state.items.is_empty()
    }

    /// 清空商品，保留開關狀態
    pub fn clear_products(&mut self) -> CartState {
        self.state.items.clear();
        tracing::debug!("Cart products cleared");
        self.state()
    }

    /// 清空商品並關閉購物車
    pub fn clear_cart(&mut self) -> CartState {
        self.state.items.clear();
        self.state.open = false;
        tracing::debug!("Cart cleared and closed");
        self.state()
    }

    pub fn open(&mut self) -> CartState {
        self.state.open = true;
        self.state()
    }

    pub fn close(&mut self) -> CartState {
        self.state.open = false;
        self.state()
    }
}
