use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::article::Article;
use crate::models::country::Country;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate article id {0}")]
    DuplicateArticle(i64),

    #[error("duplicate country id '{0}'")]
    DuplicateCountry(String),

    #[error("article id must be positive, got {0}")]
    InvalidArticleId(i64),
}

/// The static, read-only site content: countries and articles in catalog order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Catalog {
    #[cfg(test)]
    pub fn new(countries: Vec<Country>, articles: Vec<Article>) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            countries,
            articles,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        info!(
            "Loaded catalog from {}: {} countries, {} articles",
            path.display(),
            catalog.countries.len(),
            catalog.articles.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut country_ids = HashSet::new();
        for c in &self.countries {
            if !country_ids.insert(c.id.as_str()) {
                return Err(CatalogError::DuplicateCountry(c.id.clone()));
            }
        }

        let mut article_ids = HashSet::new();
        for a in &self.articles {
            if a.id <= 0 {
                return Err(CatalogError::InvalidArticleId(a.id));
            }
            if !article_ids.insert(a.id) {
                return Err(CatalogError::DuplicateArticle(a.id));
            }
            if !country_ids.contains(a.country.as_str()) {
                warn!(
                    "Article {} references unknown country '{}'; its label will be empty",
                    a.id, a.country
                );
            }
        }
        Ok(())
    }

    pub fn country(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    pub fn article(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn country_of(&self, article: &Article) -> Option<&Country> {
        self.country(&article.country)
    }
}
