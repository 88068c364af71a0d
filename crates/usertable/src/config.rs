use std::env;

/// Default name of the Users table.
pub const DEFAULT_TABLE_NAME: &str = "Users";

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table name (default: "Users")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: unset)
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Items evaluated per scan request (default: unset, the store's own page bound)
    pub scan_page_size: Option<u32>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `USERS_TABLE_NAME` - DynamoDB table name (default: "Users")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint URL (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `SCAN_PAGE_SIZE` - Scan `Limit` per request (default: unset)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("USERS_TABLE_NAME")
                .unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            scan_page_size: env::var("SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0),
        }
    }

    pub fn with_table_name(mut self, table_name: Option<String>) -> Self {
        if let Some(table_name) = table_name {
            self.table_name = table_name;
        }
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        if endpoint_url.is_some() {
            self.endpoint_url = endpoint_url;
        }
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        self
    }

    /// Overrides the scan page size. Zero is ignored.
    pub fn with_scan_page_size(mut self, scan_page_size: Option<u32>) -> Self {
        if let Some(size) = scan_page_size.filter(|size| *size > 0) {
            self.scan_page_size = Some(size);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            endpoint_url: None,
            region: DEFAULT_REGION.to_string(),
            scan_page_size: None,
        }
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("USERS_TABLE_NAME");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("AWS_REGION");
        env::remove_var("SCAN_PAGE_SIZE");

        let config = Config::from_env();

        assert_eq!(config, base());
    }

    #[test]
    fn test_overrides_replace_values() {
        let config = base()
            .with_table_name(Some("UsersTest".to_string()))
            .with_endpoint_url(Some("http://localhost:8000".to_string()))
            .with_region(Some("eu-west-1".to_string()))
            .with_scan_page_size(Some(25));

        assert_eq!(config.table_name, "UsersTest");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.scan_page_size, Some(25));
    }

    #[test]
    fn test_missing_overrides_keep_values() {
        let config = base()
            .with_table_name(None)
            .with_endpoint_url(None)
            .with_region(None)
            .with_scan_page_size(None);

        assert_eq!(config, base());
    }

    #[test]
    fn test_zero_page_size_is_ignored() {
        let config = base().with_scan_page_size(Some(0));
        assert_eq!(config.scan_page_size, None);
    }
}
