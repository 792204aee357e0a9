use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;

/// Layout files looked up under the templates directory
const LAYOUT_FILES: &[&str] = &["index.html", "article.html"];

/// Stylesheets served from the static directory
const STATIC_FILES: &[&str] = &["css/style.css"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing optional files, and
/// aborts if the catalog is absent.
pub fn run(config: &SiteConfig) {
    info!("Boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in [config.templates_dir.as_str(), config.static_dir.as_str()] {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Catalog ─────────────────────────────────────
    if !Path::new(&config.catalog_path).is_file() {
        error!("  MISSING catalog: {}", config.catalog_path);
        errors += 1;
    }

    // ── 3. Layouts ─────────────────────────────────────
    for file in LAYOUT_FILES {
        let path = Path::new(&config.templates_dir).join(file);
        if !path.exists() {
            warn!("  Missing layout: {} (built-in default will be used)", path.display());
            warnings += 1;
        }
    }

    // ── 4. Static assets ───────────────────────────────
    for file in STATIC_FILES {
        let path = Path::new(&config.static_dir).join(file);
        if !path.exists() {
            warn!("  Missing static asset: {} (pages will be unstyled)", path.display());
            warnings += 1;
        }
    }

    // ── 5. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some pages may look different.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
