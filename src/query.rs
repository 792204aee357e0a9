use url::form_urlencoded;

use crate::filter::ArticleFilter;

/// Decoded query-string parameters of a page address.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a raw query string (with or without the leading `?`).
    /// `+` decodes to a space and `%XX` sequences are percent-decoded.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes()).into_owned().collect();
        QueryParams { pairs }
    }

    pub fn from_uri_query(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    /// First value for `name`, or `None` when the parameter is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but an empty value counts as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

/// Listing-page input: the filters plus how many pages are revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filter: ArticleFilter,
    pub page: usize,
}

impl ListingQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        let page = params
            .get("page")
            .and_then(parse_leading_int)
            .filter(|p| *p >= 1)
            .map(|p| p as usize)
            .unwrap_or(1);

        ListingQuery {
            filter: ArticleFilter {
                country: params.get_non_empty("country").map(str::to_string),
                tag: params.get_non_empty("tag").map(str::to_string),
                search: params.get_non_empty("search").map(str::to_string),
            },
            page,
        }
    }

    /// Listing URL carrying the same filters with `page` revealed.
    pub fn href_for_page(&self, page: usize) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if let Some(c) = &self.filter.country {
            ser.append_pair("country", c);
        }
        if let Some(t) = &self.filter.tag {
            ser.append_pair("tag", t);
        }
        if let Some(s) = &self.filter.search {
            ser.append_pair("search", s);
        }
        ser.append_pair("page", &page.to_string());
        format!("/?{}", ser.finish())
    }
}

/// Article id requested by a detail page. Missing or non-numeric means not found.
pub fn detail_id(params: &QueryParams) -> Option<i64> {
    params.get("id").and_then(parse_leading_int)
}

/// Reads a leading integer the way page scripts do: optional whitespace and
/// sign, then as many digits as are present ("12abc" -> 12, "abc" -> None).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Percent-encodes a single query value.
pub fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus() {
        let q = QueryParams::parse("?search=%E4%BA%AC%E9%83%BD&tag=hot+spring");
        assert_eq!(q.get("search"), Some("京都"));
        assert_eq!(q.get("tag"), Some("hot spring"));
        assert_eq!(q.get("country"), None);
    }

    #[test]
    fn first_value_wins() {
        let q = QueryParams::parse("country=jp&country=kr");
        assert_eq!(q.get("country"), Some("jp"));
    }

    #[test]
    fn empty_values_are_absent_for_listing() {
        let q = QueryParams::parse("country=&tag=food");
        let listing = ListingQuery::from_params(&q);
        assert_eq!(listing.filter.country, None);
        assert_eq!(listing.filter.tag.as_deref(), Some("food"));
        assert_eq!(listing.page, 1);
    }

    #[test]
    fn page_defaults_and_clamps() {
        let listing = ListingQuery::from_params(&QueryParams::parse("page=3"));
        assert_eq!(listing.page, 3);
        let listing = ListingQuery::from_params(&QueryParams::parse("page=0"));
        assert_eq!(listing.page, 1);
        let listing = ListingQuery::from_params(&QueryParams::parse("page=x"));
        assert_eq!(listing.page, 1);
    }

    #[test]
    fn leading_int() {
        assert_eq!(parse_leading_int("5"), Some(5));
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn detail_id_missing_or_bad() {
        assert_eq!(detail_id(&QueryParams::parse("id=7")), Some(7));
        assert_eq!(detail_id(&QueryParams::parse("id=seven")), None);
        assert_eq!(detail_id(&QueryParams::default()), None);
    }

    #[test]
    fn page_href_keeps_filters() {
        let listing = ListingQuery::from_params(&QueryParams::parse("tag=%E7%BE%8E%E9%A3%9F"));
        assert_eq!(listing.href_for_page(2), "/?tag=%E7%BE%8E%E9%A3%9F&page=2");
    }
}
