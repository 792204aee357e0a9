use log::warn;
use serde::Deserialize;

/// Site settings, read from the `[default.site]` table of Rocket.toml.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub tagline: String,
    pub catalog_path: String,
    pub templates_dir: String,
    pub static_dir: String,
    pub page_size: usize,
    pub popular_limit: usize,
    pub tag_cloud_limit: usize,
    pub related_limit: usize,
    pub back_to_top_threshold: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "漫遊世界".to_string(),
            tagline: "用雙腳丈量世界，用文字記錄旅程".to_string(),
            catalog_path: "website/data/catalog.toml".to_string(),
            templates_dir: "website/templates".to_string(),
            static_dir: "website/static".to_string(),
            page_size: 6,
            popular_limit: 5,
            tag_cloud_limit: 15,
            related_limit: 4,
            back_to_top_threshold: 400,
        }
    }
}

impl SiteConfig {
    pub fn load() -> Self {
        match rocket::Config::figment().extract_inner::<SiteConfig>("site") {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("No usable [site] config ({}); using defaults", e);
                SiteConfig::default()
            }
        }
    }
}
