//! Query-string and URL helpers.

use std::collections::BTreeMap;

/// Returns `pathname` with `params` rewritten so that `key` holds `value`.
///
/// `params` is a query string with or without its leading `?`. Existing values
/// of `key` are replaced, repeated keys keep their order, and keys that carry
/// no `=` are dropped. The rendered query lists keys in sorted order with
/// every reserved character percent-encoded.
///
/// ```
/// use finboard_core::query::form_url_query;
///
/// assert_eq!(form_url_query("?b=2&a=1", "page", "3", "/"), "/?a=1&b=2&page=3");
/// ```
#[must_use]
pub fn form_url_query(params: &str, key: &str, value: &str, pathname: &str) -> String {
    let mut query = parse_query(params);
    query.insert(key.to_string(), vec![value.to_string()]);

    let rendered = render_query(&query);
    if rendered.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{rendered}")
    }
}

/// Returns the last `/`-separated segment of `url`.
///
/// A URL ending in `/` yields an empty segment.
#[must_use]
pub fn extract_customer_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

fn parse_query(params: &str) -> BTreeMap<String, Vec<String>> {
    let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let params = params.trim().trim_start_matches('?');

    for pair in params.split('&').filter(|pair| !pair.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        query.entry(decode(key)).or_default().push(decode(value));
    }
    query
}

fn render_query(query: &BTreeMap<String, Vec<String>>) -> String {
    query
        .iter()
        .flat_map(|(key, values)| {
            let key = urlencoding::encode(key);
            values
                .iter()
                .map(move |value| format!("{key}={}", urlencoding::encode(value)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes one query component, keeping the raw text if it is not valid
/// percent-encoded UTF-8.
fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
