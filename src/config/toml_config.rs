use crate::core::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storefront: StorefrontInfo,
    pub source: SourceConfig,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub products_file: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub output_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StorefrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| StorefrontError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        use crate::utils::validation::{
            validate_non_empty_string, validate_path, validate_range, validate_required_field,
            validate_url,
        };

        validate_non_empty_string("storefront.name", &self.storefront.name)?;

        // 有本地檔案時不需要 API 端點
        match &self.source.products_file {
            Some(path) => validate_path("source.products_file", path)?,
            None => {
                let endpoint = validate_required_field("source.endpoint", &self.source.endpoint)?;
                validate_url("source.endpoint", endpoint)?;
            }
        }

        validate_range("source.timeout_seconds", self.timeout_seconds(), 1, 300)?;

        crate::app::render::OutputFormat::parse("display.output_format", self.output_format())?;

        Ok(())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn output_format(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.output_format.as_deref())
            .unwrap_or("text")
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or_default()
    }

    fn products_file(&self) -> Option<&str> {
        self.source.products_file.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds()
    }

    fn output_format(&self) -> &str {
        self.output_format()
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        self.source.headers.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[storefront]
name = "test-store"
description = "Test store"

[source]
endpoint = "https://shop.example.com/api/products"
timeout_seconds = 3

[source.headers]
x-api-key = "abc"

[display]
output_format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.storefront.name, "test-store");
        assert_eq!(
            config.api_endpoint(),
            "https://shop.example.com/api/products"
        );
        assert_eq!(ConfigProvider::timeout_seconds(&config), 3);
        assert_eq!(ConfigProvider::output_format(&config), "json");
        assert_eq!(
            config.headers().and_then(|h| h.get("x-api-key")).map(String::as_str),
            Some("abc")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let toml_content = r#"
[storefront]
name = "defaults"

[source]
endpoint = "http://localhost:3000/api/products"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.output_format(), "text");
        assert!(config.headers().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STOREFRONT_TEST_ENDPOINT", "https://test.api.com/api/products");

        let toml_content = r#"
[storefront]
name = "env"

[source]
endpoint = "${STOREFRONT_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://test.api.com/api/products");

        std::env::remove_var("STOREFRONT_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = r#"
[storefront]
name = "test"

[source]
endpoint = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(invalid_url).unwrap();
        assert!(config.validate().is_err());

        let missing_source = r#"
[storefront]
name = "test"

[source]
"#;
        let config = TomlConfig::from_toml_str(missing_source).unwrap();
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::MissingConfigError { .. })
        ));

        let bad_format = r#"
[storefront]
name = "test"

[source]
products_file = "fixtures/products.json"

[display]
output_format = "xml"
"#;
        let config = TomlConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[storefront]
name = "file-test"

[source]
products_file = "products.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storefront.name, "file-test");
        assert_eq!(config.products_file(), Some("products.json"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[storefront");
        assert!(matches!(
            result,
            Err(StorefrontError::ConfigValidationError { .. })
        ));
    }
}
