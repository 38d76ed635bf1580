use crate::domain::model::{Product, ProductsResponse};
use crate::domain::ports::{ConfigProvider, ProductSource};
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// 透過 `GET /api/products` 取得商品目錄
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    endpoint: String,
}

impl HttpProductSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.timeout_seconds()));

        if let Some(headers) = config.headers() {
            builder = builder.default_headers(build_headers(headers)?);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.api_endpoint().to_string(),
        })
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            StorefrontError::InvalidConfigValueError {
                field: "source.headers".to_string(),
                value: key.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            StorefrontError::InvalidConfigValueError {
                field: format!("source.headers.{}", key),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            }
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload: ProductsResponse = serde_json::from_slice(&body)?;
        Ok(payload.products)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
