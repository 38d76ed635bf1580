#![allow(dead_code)]

use httpmock::prelude::*;
use small_storefront::Product;

/// 測試用商品工廠：依序產生 id 與標題
pub struct ProductFactory {
    next_id: u64,
}

impl ProductFactory {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn create(&mut self) -> Product {
        let id = self.next_id;
        self.create_with_title(&format!("Product {}", id))
    }

    pub fn create_with_title(&mut self, title: &str) -> Product {
        let id = self.next_id;
        self.next_id += 1;
        Product::new(id, title, format!("{}.99", id * 3).as_str())
    }

    pub fn create_list(&mut self, quantity: usize) -> Vec<Product> {
        (0..quantity).map(|_| self.create()).collect()
    }
}

/// 回傳 `{ products: [...] }` 的 `/api/products` mock
pub fn mock_products<'a>(server: &'a MockServer, products: &[Product]) -> httpmock::Mock<'a> {
    let body = serde_json::json!({ "products": products });
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}
