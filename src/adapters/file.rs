use crate::domain::model::{Product, ProductsResponse};
use crate::domain::ports::ProductSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 從本地 JSON 檔案 (`{"products": [...]}`) 讀取商品目錄
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let data = tokio::fs::read(&self.path).await?;
        let payload: ProductsResponse = serde_json::from_slice(&data)?;
        Ok(payload.products)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
