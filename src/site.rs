use std::path::Path;

use crate::catalog::{Catalog, CatalogError};
use crate::config::SiteConfig;
use crate::layout::Layouts;

/// Everything a page render needs besides the visitor's local storage.
/// Shared via Rocket managed state; immutable after boot.
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub layouts: Layouts,
}

impl Site {
    pub fn new(config: SiteConfig, catalog: Catalog, layouts: Layouts) -> Self {
        Site {
            config,
            catalog,
            layouts,
        }
    }

    pub fn load(config: SiteConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(Path::new(&config.catalog_path))?;
        let layouts = Layouts::load(Path::new(&config.templates_dir));
        Ok(Site::new(config, catalog, layouts))
    }
}
