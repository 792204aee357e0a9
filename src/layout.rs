use std::fs;
use std::path::Path;

use log::warn;

const DEFAULT_INDEX: &str = include_str!("../website/templates/index.html");
const DEFAULT_ARTICLE: &str = include_str!("../website/templates/article.html");

/// Named insertion points a layout may contain as `{{name}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    PageTitle,
    SiteName,
    NavMenu,
    NavToggle,
    Hero,
    SectionTitle,
    ArticleCount,
    ArticlesGrid,
    LoadMore,
    SearchBox,
    CategoryList,
    PopularList,
    TagCloud,
    FooterCountries,
    BackToTop,
    ArticleDetail,
    RelatedList,
    ChromeScript,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::PageTitle => "page_title",
            Target::SiteName => "site_name",
            Target::NavMenu => "nav_menu",
            Target::NavToggle => "nav_toggle",
            Target::Hero => "hero",
            Target::SectionTitle => "section_title",
            Target::ArticleCount => "article_count",
            Target::ArticlesGrid => "articles_grid",
            Target::LoadMore => "load_more",
            Target::SearchBox => "search_box",
            Target::CategoryList => "category_list",
            Target::PopularList => "popular_list",
            Target::TagCloud => "tag_cloud",
            Target::FooterCountries => "footer_countries",
            Target::BackToTop => "back_to_top",
            Target::ArticleDetail => "article_detail",
            Target::RelatedList => "related_list",
            Target::ChromeScript => "chrome_script",
        }
    }

    pub fn placeholder(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    html: String,
}

impl Layout {
    pub fn new(html: impl Into<String>) -> Self {
        Layout { html: html.into() }
    }

    pub fn has(&self, target: Target) -> bool {
        self.html.contains(&target.placeholder())
    }

    /// Walks the layout once, replacing each `{{name}}` with its fragment or
    /// dropping it when no fragment was built. Fragment text is copied
    /// verbatim and never scanned for placeholders.
    pub fn fill(&self, fragments: &[(Target, String)]) -> String {
        let mut out = String::with_capacity(self.html.len());
        let mut rest = self.html.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}").filter(|&end| is_placeholder_name(&after[..end])) {
                Some(end) => {
                    let name = &after[..end];
                    if let Some((_, fragment)) = fragments.iter().find(|(t, _)| t.name() == name) {
                        out.push_str(fragment);
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// The two page layouts: the listing (homepage) and the article detail.
#[derive(Debug, Clone)]
pub struct Layouts {
    pub index: Layout,
    pub article: Layout,
}

impl Default for Layouts {
    fn default() -> Self {
        Layouts {
            index: Layout::new(DEFAULT_INDEX),
            article: Layout::new(DEFAULT_ARTICLE),
        }
    }
}

impl Layouts {
    /// Reads `index.html` and `article.html` from `dir`, falling back to the
    /// built-in layout for any file that cannot be read.
    pub fn load(dir: &Path) -> Self {
        Layouts {
            index: load_one(&dir.join("index.html"), DEFAULT_INDEX),
            article: load_one(&dir.join("article.html"), DEFAULT_ARTICLE),
        }
    }
}

fn load_one(path: &Path, fallback: &str) -> Layout {
    match fs::read_to_string(path) {
        Ok(html) => Layout::new(html),
        Err(e) => {
            warn!("Layout {} unavailable ({}); using built-in default", path.display(), e);
            Layout::new(fallback)
        }
    }
}

/// Placeholder names are lowercase letters and underscores only.
fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}
