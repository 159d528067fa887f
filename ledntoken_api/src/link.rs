//! Parsing of the HTTP `Link` header into [`PageLinks`].

use url::form_urlencoded;

use crate::types::PageLinks;

/// Parses a header such as
/// `<http://x/accounts?_page=1>; rel="first", <http://x/accounts?_page=3>; rel="next"`.
///
/// The page number of each entry is the value of the first query parameter
/// of its URL. Entries that do not parse are skipped; unknown relations are
/// ignored; a repeated relation keeps its last occurrence.
pub fn parse_link_header(header: &str) -> PageLinks {
    let mut links = PageLinks::default();
    for entry in split_entries(header) {
        match parse_entry(entry) {
            Some((rel, page)) => {
                if !links.set(rel, page) {
                    tracing::debug!("Ignoring unknown Link relation {:?}", rel);
                }
            }
            None => tracing::warn!("Skipping malformed Link entry: {:?}", entry),
        }
    }
    links
}

/// Splits on commas that are not inside `<...>`.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut start = 0;
    for (idx, ch) in header.char_indices() {
        match ch {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                entries.push(&header[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);
    entries
        .into_iter()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect()
}

fn parse_entry(entry: &str) -> Option<(&str, i64)> {
    let rest = entry.strip_prefix('<')?;
    let (target, attrs) = rest.split_once('>')?;
    let rel = attrs
        .split(';')
        .filter_map(|attr| attr.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("rel"))
        .map(|(_, value)| value.trim().trim_matches('"'))?;
    let page = page_from_target(target.trim())?;
    Some((rel, page))
}

fn page_from_target(target: &str) -> Option<i64> {
    let (_, query) = target.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    let (_, value) = form_urlencoded::parse(query.as_bytes()).next()?;
    value.trim().parse().ok()
}
