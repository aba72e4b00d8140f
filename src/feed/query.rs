/// Query sent when the user has typed nothing: the feed's own
/// default-relevance ordering.
pub const DEFAULT_QUERY: &str = "boost:popular";

/// Build the request parameters for a search submission.
///
/// A present, non-empty input becomes `q=<input>` verbatim — no trimming is
/// applied, so whitespace-only input counts as a real query. Anything else
/// falls back to [`DEFAULT_QUERY`].
///
/// Pure function, no failure modes.
pub fn query_parameters(raw_input: Option<&str>) -> [(&'static str, String); 1] {
    match raw_input {
        Some(q) if !q.is_empty() => [("q", q.to_string())],
        _ => [("q", DEFAULT_QUERY.to_string())],
    }
}
