use anyhow::Result;

/// Site-wide values the SEO builders and payload layer read.
///
/// Loaded once at startup from the environment; every value has a default so
/// the core works out of the box in development.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Identity
    pub app_name: String,
    pub default_author: String,

    // URLs
    pub base_url: String,
    pub storage_base_url: String,

    // Fallback Open Graph image path, relative to base_url
    pub default_og_image: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Identity
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "Portfolio".to_string()),
            default_author: std::env::var("DEFAULT_AUTHOR")
                .unwrap_or_else(|_| "Portfolio Author".to_string()),

            // URLs (trailing slashes trimmed so joins stay predictable)
            base_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost".to_string())
                .trim_end_matches('/')
                .to_string(),
            storage_base_url: std::env::var("STORAGE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost/storage".to_string())
                .trim_end_matches('/')
                .to_string(),

            // Open Graph
            default_og_image: std::env::var("DEFAULT_OG_IMAGE")
                .unwrap_or_else(|_| "/images/og-default.jpg".to_string()),
        })
    }

    /// Absolute URL for a storage-relative media path.
    pub fn media_url(&self, path: &str) -> String {
        format!("{}/{}", self.storage_base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a site-relative path.
    pub fn site_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_name: "Portfolio".to_string(),
            default_author: "Portfolio Author".to_string(),
            base_url: "http://localhost".to_string(),
            storage_base_url: "http://localhost/storage".to_string(),
            default_og_image: "/images/og-default.jpg".to_string(),
        }
    }
}
