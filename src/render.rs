use crate::chrome::{self, BackToTop, MenuState, NavItem};
use crate::detail::build_detail;
use crate::layout::{Layout, Target};
use crate::listing::build_listing;
use crate::query::{detail_id, ListingQuery, QueryParams};
use crate::site::Site;
use crate::store::KeyValueStore;
use crate::view_model::{
    ArticleCard, ArticleDetail, ArticleLink, CategoryItem, CountryLink, DetailPage, Hero,
    NeighbourLink, TagLink,
};
use crate::views::ViewCounter;
use crate::widgets;

/// Which page an address points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Detail,
}

impl PageKind {
    pub fn from_path(path: &str) -> Self {
        if path.contains("article") {
            PageKind::Detail
        } else {
            PageKind::Listing
        }
    }
}

/// Collects fragments for the targets the layout actually has. A target
/// missing from the layout is never built.
struct PageBuilder<'l> {
    layout: &'l Layout,
    fragments: Vec<(Target, String)>,
}

impl<'l> PageBuilder<'l> {
    fn new(layout: &'l Layout) -> Self {
        PageBuilder {
            layout,
            fragments: Vec::new(),
        }
    }

    fn slot(&mut self, target: Target, build: impl FnOnce() -> String) {
        if self.layout.has(target) {
            self.fragments.push((target, build()));
        }
    }

    fn finish(self) -> String {
        self.layout.fill(&self.fragments)
    }
}

/// Renders one page load for `path?query`.
///
/// Chrome and sidebar widgets build first, then the listing or detail flow
/// runs. The detail flow bumps the article's view overlay in `store`, so
/// the popular list on that same page still reflects pre-visit counts.
pub fn render_page(
    site: &Site,
    path: &str,
    query: Option<&str>,
    store: &dyn KeyValueStore,
) -> String {
    let params = QueryParams::from_uri_query(query);
    let kind = PageKind::from_path(path);
    let layout = match kind {
        PageKind::Listing => &site.layouts.index,
        PageKind::Detail => &site.layouts.article,
    };
    let catalog = &site.catalog;
    let config = &site.config;
    let counter = ViewCounter::new(store);
    let mut page = PageBuilder::new(layout);

    // ── Chrome ──
    page.slot(Target::SiteName, || html_escape(&config.site_name));
    page.slot(Target::NavToggle, build_nav_toggle);
    page.slot(Target::NavMenu, || {
        let items = chrome::nav_items(&catalog.countries, params.get_non_empty("country"));
        build_nav_menu(&items, MenuState::default())
    });
    page.slot(Target::FooterCountries, || {
        let links: Vec<CountryLink> = catalog.countries.iter().map(CountryLink::from).collect();
        build_footer_countries(&links)
    });
    page.slot(Target::BackToTop, || {
        build_back_to_top(BackToTop {
            threshold: config.back_to_top_threshold,
        })
    });
    page.slot(Target::ChromeScript, || chrome::CHROME_JS.to_string());
    page.slot(Target::SearchBox, || build_search_box(params.get("search").unwrap_or("")));

    // ── Sidebar ──
    page.slot(Target::CategoryList, || {
        let items: Vec<CategoryItem> = widgets::category_counts(catalog)
            .into_iter()
            .map(|(c, count)| CategoryItem {
                href: c.href(),
                label: c.label(),
                count,
            })
            .collect();
        build_category_list(&items)
    });
    page.slot(Target::PopularList, || {
        let links: Vec<ArticleLink> =
            widgets::popular(&catalog.articles, &counter, config.popular_limit)
                .into_iter()
                .map(ArticleLink::from)
                .collect();
        build_article_links(&links)
    });
    page.slot(Target::TagCloud, || {
        let tags: Vec<TagLink> = widgets::tag_cloud(&catalog.articles, config.tag_cloud_limit)
            .into_iter()
            .map(|(tag, _)| TagLink::new(tag))
            .collect();
        build_tag_links(&tags)
    });

    match kind {
        PageKind::Listing => {
            let query = ListingQuery::from_params(&params);
            let listing = build_listing(catalog, &query, &counter, config);

            page.slot(Target::PageTitle, || html_escape(&config.site_name));
            page.slot(Target::Hero, || build_hero(&listing.hero));
            page.slot(Target::SectionTitle, || html_escape(&listing.section_title));
            page.slot(Target::ArticleCount, || html_escape(&listing.count_label));
            page.slot(Target::ArticlesGrid, || {
                if listing.is_empty() {
                    build_no_results()
                } else {
                    listing.cards.iter().map(build_card).collect()
                }
            });
            page.slot(Target::LoadMore, || {
                listing.load_more.as_deref().map(build_load_more).unwrap_or_default()
            });
        }
        PageKind::Detail => {
            let detail = build_detail(catalog, detail_id(&params), &counter, config.related_limit);

            page.slot(Target::PageTitle, || match &detail {
                DetailPage::Found(a) => html_escape(&format!("{} - {}", a.title, config.site_name)),
                DetailPage::NotFound => html_escape(&config.site_name),
            });
            page.slot(Target::ArticleDetail, || match &detail {
                DetailPage::Found(a) => build_article_detail(a),
                DetailPage::NotFound => build_article_not_found(),
            });
            page.slot(Target::RelatedList, || match &detail {
                DetailPage::Found(a) => build_article_links(&a.related),
                DetailPage::NotFound => String::new(),
            });
        }
    }

    page.finish()
}

// ── Chrome fragments ───────────────────────────────────

fn build_nav_toggle() -> String {
    r#"<button class="nav-toggle" id="navToggle" aria-label="選單">☰</button>"#.to_string()
}

fn build_nav_menu(items: &[NavItem], menu: MenuState) -> String {
    let mut html = format!(r#"<ul class="{}" id="navMenu">"#, menu.class());
    for item in items {
        let active = if item.active { " active" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{href}\" class=\"nav-link{active}\" data-country=\"{id}\">\
             <span class=\"country-emoji\">{emoji}</span>{name}</a></li>",
            href = html_escape(&item.href),
            active = active,
            id = html_escape(&item.country_id),
            emoji = html_escape(&item.emoji),
            name = html_escape(&item.name),
        ));
    }
    html.push_str("</ul>");
    html
}

fn build_footer_countries(links: &[CountryLink]) -> String {
    links
        .iter()
        .map(|c| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                html_escape(&c.href),
                html_escape(&c.label)
            )
        })
        .collect()
}

fn build_back_to_top(btn: BackToTop) -> String {
    format!(
        r#"<button class="back-to-top" id="backToTop" data-threshold="{}" aria-label="回到頂部">↑</button>"#,
        btn.threshold
    )
}

fn build_search_box(current: &str) -> String {
    format!(
        "<form class=\"search-box\" action=\"/search\" method=\"get\">\
         <input type=\"text\" id=\"searchInput\" name=\"q\" value=\"{}\" placeholder=\"搜尋文章、標籤...\">\
         <button type=\"submit\" id=\"searchBtn\">搜尋</button>\
         </form>",
        html_escape(current)
    )
}

fn build_hero(hero: &Hero) -> String {
    format!(
        "<h1 class=\"hero-title\">{}</h1><p class=\"hero-desc\">{}</p>",
        html_escape(&hero.title),
        html_escape(&hero.description)
    )
}

// ── Sidebar fragments ──────────────────────────────────

fn build_category_list(items: &[CategoryItem]) -> String {
    items
        .iter()
        .map(|c| {
            format!(
                "<li><a href=\"{}\"><span>{}</span><span class=\"category-count\">{}</span></a></li>",
                html_escape(&c.href),
                html_escape(&c.label),
                c.count
            )
        })
        .collect()
}

/// Image + title + date entries for the popular and related lists.
fn build_article_links(links: &[ArticleLink]) -> String {
    links
        .iter()
        .map(|a| {
            format!(
                "<li class=\"popular-item\">\
                 <a href=\"{href}\" class=\"popular-item-image\"><img src=\"{image}\" alt=\"{title}\" loading=\"lazy\"></a>\
                 <div class=\"popular-item-info\">\
                 <a href=\"{href}\" class=\"popular-item-title\">{title}</a>\
                 <div class=\"popular-item-date\">{date}</div>\
                 </div></li>",
                href = html_escape(&a.href),
                image = html_escape(&a.image),
                title = html_escape(&a.title),
                date = html_escape(&a.date),
            )
        })
        .collect()
}

fn build_tag_links(tags: &[TagLink]) -> String {
    tags.iter()
        .map(|t| {
            format!(
                "<a href=\"{}\" class=\"tag\">{}</a>",
                html_escape(&t.href),
                html_escape(&t.label)
            )
        })
        .collect()
}

// ── Listing fragments ──────────────────────────────────

fn build_card(card: &ArticleCard) -> String {
    let class = if card.featured {
        "article-card featured"
    } else {
        "article-card"
    };
    format!(
        "<div class=\"{class}\">\
         <div class=\"article-card-image\">\
         <a href=\"{href}\"><img src=\"{image}\" alt=\"{title}\" loading=\"lazy\"></a>\
         <span class=\"article-card-country\">{country}</span>\
         </div>\
         <div class=\"article-card-body\">\
         <div class=\"article-card-meta\">\
         <span class=\"date\">{date}</span>\
         <span class=\"read-time\">{read_time}</span>\
         <span class=\"views\">👁 {views}</span>\
         </div>\
         <a href=\"{href}\"><h3 class=\"article-card-title\">{title}</h3></a>\
         <p class=\"article-card-excerpt\">{excerpt}</p>\
         <div class=\"article-card-tags\">{tags}</div>\
         <a href=\"{href}\" class=\"read-more\">繼續閱讀</a>\
         </div></div>",
        class = class,
        href = html_escape(&card.href),
        image = html_escape(&card.image),
        title = html_escape(&card.title),
        country = html_escape(&card.country_label),
        date = html_escape(&card.date),
        read_time = html_escape(&card.read_time),
        views = html_escape(&card.views),
        excerpt = html_escape(&card.excerpt),
        tags = build_tag_links(&card.tags),
    )
}

fn build_no_results() -> String {
    r#"<div class="no-results">
    <div class="no-results-icon">🔍</div>
    <h3>找不到相關文章</h3>
    <p>換個關鍵字試試看吧！</p>
</div>"#
        .to_string()
}

fn build_load_more(href: &str) -> String {
    format!(
        r#"<div class="load-more" id="loadMore"><a href="{}" class="load-more-btn" id="loadMoreBtn">載入更多</a></div>"#,
        html_escape(href)
    )
}

// ── Detail fragments ───────────────────────────────────

fn build_neighbour(link: Option<&NeighbourLink>, class: &str, label: &str) -> String {
    match link {
        Some(n) => format!(
            "<a href=\"{}\" class=\"{}\">\
             <span class=\"article-nav-label\">{}</span>\
             <span class=\"article-nav-title\">{}</span></a>",
            html_escape(&n.href),
            class,
            label,
            html_escape(&n.title)
        ),
        None => "<div></div>".to_string(),
    }
}

fn build_article_detail(a: &ArticleDetail) -> String {
    format!(
        "<div class=\"article-hero-image\"><img src=\"{image}\" alt=\"{title}\"></div>\
         <div class=\"article-detail-body\">\
         <div class=\"article-breadcrumb\">\
         <a href=\"/\">首頁</a><span>›</span>\
         <a href=\"{country_href}\">{country}</a><span>›</span>\
         <span>{title}</span>\
         </div>\
         <h1 class=\"article-detail-title\">{title}</h1>\
         <div class=\"article-detail-meta\">\
         <span>📅 {date}</span>\
         <span>⏱ {read_time}</span>\
         <span>👁 {views}</span>\
         <span>{country}</span>\
         </div>\
         <div class=\"article-detail-tags\">{tags}</div>\
         <div class=\"article-detail-content\">{content}</div>\
         <div class=\"article-nav\">{prev}{next}</div>\
         </div>",
        image = html_escape(&a.image),
        title = html_escape(&a.title),
        country_href = html_escape(&a.country_href),
        country = html_escape(&a.country_label),
        date = html_escape(&a.date),
        read_time = html_escape(&a.read_time),
        views = html_escape(&a.views),
        tags = build_tag_links(&a.tags),
        content = a.content,
        prev = build_neighbour(a.prev.as_ref(), "prev", "← 上一篇"),
        next = build_neighbour(a.next.as_ref(), "next", "下一篇 →"),
    )
}

fn build_article_not_found() -> String {
    r#"<div class="article-detail-body">
    <div class="no-results">
        <div class="no-results-icon">😕</div>
        <h3>找不到這篇文章</h3>
        <p><a href="/">回到首頁</a></p>
    </div>
</div>"#
        .to_string()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
