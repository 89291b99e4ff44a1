use url::Url;

/// Fixed prefix of every issued query URL.
pub const SEARCH_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Builds the query URL for a search term.
pub fn query_url(term: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!("{SEARCH_ENDPOINT}?query={encoded}")
}

/// Recovers the search term embedded in a query URL, decoded.
///
/// Returns `None` if the URL does not parse or carries no `query` parameter.
pub fn extract_search_term(query_url: &str) -> Option<String> {
    let parsed = Url::parse(query_url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
}
