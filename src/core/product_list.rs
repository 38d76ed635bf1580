use crate::core::product_filter::filter_products;
use crate::domain::model::{Product, ProductId};
use crate::domain::ports::ProductSource;
use crate::utils::error::Result;

/// 載入失敗時顯示給使用者的固定訊息
pub const LOAD_FAILURE_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug)]
pub struct ProductList {
    products: Vec<Product>,
    search: String,
    status: LoadStatus,
}

impl Default for ProductList {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            search: String::new(),
            status: LoadStatus::Pending,
        }
    }
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 透過來源載入商品目錄，失敗時只保留固定訊息並把錯誤交回呼叫端
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        tracing::debug!("Fetching products from {}", source.describe());

        match source.fetch_products().await {
            Ok(products) => {
                tracing::info!("📦 Loaded {} products", products.len());
                self.products = products;
                self.status = LoadStatus::Loaded;
                Ok(self.products.len())
            }
            Err(e) => {
                tracing::error!("❌ Failed to load products from {}: {}", source.describe(), e);
                self.products.clear();
                self.status = LoadStatus::Failed(LOAD_FAILURE_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        tracing::debug!("Search set to {:?}", search);
        self.search = search.to_string();
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search)
    }

    pub fn quantity_label(&self) -> String {
        match self.visible().len() {
            1 => "1 Product".to_string(),
            n => format!("{} Products", n),
        }
    }
}
