use crate::core::cart_manager::CartManager;
use crate::core::product_list::ProductList;
use crate::core::quantity::QuantityControl;
use crate::core::search::{SearchEvent, SearchInput};
use crate::domain::model::{CartState, Product, ProductId};
use crate::domain::ports::ProductSource;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 單一商店畫面：商品列表、搜尋框、購物車與每列的數量控制
#[derive(Debug, Default)]
pub struct Storefront {
    products: ProductList,
    search_input: SearchInput,
    cart: CartManager,
    quantities: HashMap<ProductId, QuantityControl>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        self.products.load(source).await
    }

    pub fn products(&self) -> &ProductList {
        &self.products
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn type_search(&mut self, value: &str) {
        if let Some(event) = self.search_input.set_value(value) {
            self.handle_search(event);
        }
    }

    pub fn submit_search(&mut self) -> Vec<&Product> {
        let event = self.search_input.submit();
        self.handle_search(event);
        self.products.visible()
    }

    fn handle_search(&mut self, event: SearchEvent) {
        self.products.set_search(&event.search);
    }

    /// 加入購物車並打開購物車；找不到商品時回傳 None
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Option<CartState> {
        let Some(product) = self.products.find(product_id) else {
            tracing::warn!("Product {} is not in the catalog", product_id);
            return None;
        };

        self.cart.add_product(product);
        self.quantities.entry(product_id.clone()).or_default();
        Some(self.cart.open())
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> CartState {
        self.quantities.remove(product_id);
        self.cart.remove_product(product_id)
    }

    pub fn clear_cart_items(&mut self) -> CartState {
        self.quantities.clear();
        self.cart.clear_products()
    }

    pub fn toggle_cart(&mut self) -> CartState {
        if self.cart.state().open {
            self.cart.close()
        } else {
            self.cart.open()
        }
    }

    pub fn close_cart(&mut self) -> CartState {
        self.cart.close()
    }

    pub fn quantity(&self, product_id: &ProductId) -> Option<u32> {
        self.quantities.get(product_id).map(QuantityControl::value)
    }

    pub fn increase_quantity(&mut self, product_id: &ProductId) -> Option<u32> {
        self.quantities.get_mut(product_id).map(QuantityControl::increase)
    }

    pub fn decrease_quantity(&mut self, product_id: &ProductId) -> Option<u32> {
        self.quantities.get_mut(product_id).map(QuantityControl::decrease)
    }

    /// 購物車快照，數量換成畫面上顯示的數值
    pub fn cart_view(&self) -> CartState {
        let mut state = self.cart.state();
        for item in &mut state.items {
            if let Some(quantity) = self.quantities.get(item.product_id()) {
                item.quantity = quantity.value();
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource(Vec<Product>);

    #[async_trait]
    impl ProductSource for FixedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    async fn loaded_storefront(count: u64) -> Storefront {
        let products = (1..=count)
            .map(|id| Product::new(id, format!("Product {}", id), "5.00"))
            .collect();
        let mut storefront = Storefront::new();
        storefront.load(&FixedSource(products)).await.unwrap();
        storefront
    }

    #[tokio::test]
    async fn test_cart_starts_hidden_and_empty() {
        let storefront = loaded_storefront(10).await;
        let view = storefront.cart_view();

        assert!(!view.open);
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_opens_cart() {
        let mut storefront = loaded_storefront(10).await;
        let state = storefront.add_to_cart(&1u64.into()).unwrap();

        assert!(state.open);
        assert_eq!(state.items.len(), 1);
        assert_eq!(storefront.quantity(&1u64.into()), Some(1));
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let mut storefront = loaded_storefront(3).await;
        assert!(storefront.add_to_cart(&99u64.into()).is_none());
        assert!(!storefront.cart().state().open);
    }

    #[tokio::test]
    async fn test_toggle_cart() {
        let mut storefront = loaded_storefront(1).await;
        assert!(storefront.toggle_cart().open);
        assert!(!storefront.toggle_cart().open);
    }

    #[tokio::test]
    async fn test_quantity_controls() {
        let mut storefront = loaded_storefront(5).await;
        let id: ProductId = 2u64.into();
        storefront.add_to_cart(&id);

        assert_eq!(storefront.increase_quantity(&id), Some(2));
        assert_eq!(storefront.decrease_quantity(&id), Some(1));
        assert_eq!(storefront.decrease_quantity(&id), Some(0));
        assert_eq!(storefront.decrease_quantity(&id), Some(0));
        assert_eq!(storefront.cart_view().items[0].quantity, 0);

        assert_eq!(storefront.increase_quantity(&3u64.into()), None);
    }

    #[tokio::test]
    async fn test_re_adding_keeps_quantity() {
        let mut storefront = loaded_storefront(5).await;
        let id: ProductId = 4u64.into();
        storefront.add_to_cart(&id);
        storefront.increase_quantity(&id);
        storefront.add_to_cart(&id);

        assert_eq!(storefront.quantity(&id), Some(2));
        assert_eq!(storefront.cart_view().items.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let mut storefront = loaded_storefront(10).await;
        for id in [1u64, 2, 3] {
            storefront.add_to_cart(&id.into());
        }

        let state = storefront.remove_from_cart(&2u64.into());
        assert_eq!(state.items.len(), 2);
        assert_eq!(storefront.quantity(&2u64.into()), None);

        let state = storefront.clear_cart_items();
        assert!(state.items.is_empty());
        assert!(state.open);
        assert!(!storefront.cart().has_products());
    }

    #[tokio::test]
    async fn test_search_flow() {
        let mut storefront = loaded_storefront(10).await;

        storefront.type_search("Product 1");
        // 輸入時不會過濾，必須送出
        assert_eq!(storefront.products().visible().len(), 10);

        let visible = storefront.submit_search();
        // "Product 1" 與 "Product 10"
        assert_eq!(visible.len(), 2);

        storefront.type_search("");
        assert_eq!(storefront.products().visible().len(), 10);
    }
}
