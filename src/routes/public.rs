use rocket::http::uri::Origin;
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use crate::query::encode;
use crate::render;
use crate::site::Site;
use crate::store::cookie::CookieStore;

fn page(site: &Site, uri: &Origin<'_>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    let store = CookieStore::new(cookies);
    let query = uri.query().map(|q| q.as_str());
    RawHtml(render::render_page(site, uri.path().as_str(), query, &store))
}

// ── Listing ────────────────────────────────────────────

#[get("/")]
pub fn index(site: &State<Site>, uri: &Origin<'_>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    page(site, uri, cookies)
}

#[get("/index.html")]
pub fn index_html(
    site: &State<Site>,
    uri: &Origin<'_>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    page(site, uri, cookies)
}

// ── Article detail ─────────────────────────────────────

#[get("/article")]
pub fn article(site: &State<Site>, uri: &Origin<'_>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    page(site, uri, cookies)
}

#[get("/article.html")]
pub fn article_html(
    site: &State<Site>,
    uri: &Origin<'_>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    page(site, uri, cookies)
}

// ── Search ─────────────────────────────────────────────

/// Listing address for a submitted search box value. Blank input clears
/// the search.
pub fn search_target(input: Option<&str>) -> String {
    match input.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("/?search={}", encode(q)),
        None => "/".to_string(),
    }
}

#[get("/search?<q>")]
pub fn search(q: Option<&str>) -> Redirect {
    Redirect::to(search_target(q))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, index_html, article, article_html, search]
}
