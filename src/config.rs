use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub catalog_base_url: String,
    pub wishlist_path: PathBuf,
}

const DEFAULT_BASE_URL: &str = "https://gutendex.com";
const DEFAULT_WISHLIST_PATH: &str = "wishlist.json";

impl Config {
    pub fn load() -> Self {
        let catalog_base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or(DEFAULT_BASE_URL.into());
        let wishlist_path =
            std::env::var("WISHLIST_PATH").unwrap_or(DEFAULT_WISHLIST_PATH.into());
        Config {
            catalog_base_url,
            wishlist_path: wishlist_path.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_base_url.is_empty() {
            return Err("CATALOG_BASE_URL is empty".into());
        }
        if !self.catalog_base_url.starts_with("http") {
            return Err(format!(
                "CATALOG_BASE_URL must be an http(s) URL, got: {}",
                self.catalog_base_url
            ));
        }
        Ok(())
    }
}
