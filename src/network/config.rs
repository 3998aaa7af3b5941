/// API route configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    // Empty means same-origin: every URL is relative to the page.
    base_url: String,
}

impl ApiConfig {
    /// Build from the compile-time `API_BASE_URL`, falling back to same-origin.
    pub fn new() -> Self {
        Self::from_url(option_env!("API_BASE_URL").unwrap_or(""))
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL. `path` may omit its leading slash.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}
