use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// 商品目錄來源 (HTTP API、本地檔案…)
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// 用於日誌的來源描述
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn products_file(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn output_format(&self) -> &str;
    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}
