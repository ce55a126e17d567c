//! Deterministic query-string assembly.
//!
//! The Graph API takes its parameters in the query string, with list values
//! joined by commas. Identifiers and enum values are passed through verbatim;
//! only free-text values (comment messages, captions, search terms) are
//! percent-encoded. Pairs are emitted `&`-joined in insertion order, so a
//! given set of inputs always produces the same bytes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters is encoded.
const FREE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a free-text query value.
pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, FREE_TEXT).to_string()
}

/// Render a field selector like `business_discovery.username(chef){id,name}`,
/// leaving the braces off when no subfields were requested.
pub(crate) fn field_selector(edge: &str, modifier: &str, argument: &str, fields: &[String]) -> String {
    if fields.is_empty() {
        format!("{edge}.{modifier}({argument})")
    } else {
        format!("{edge}.{modifier}({argument}){{{}}}", fields.join(","))
    }
}

/// Insertion-ordered query-string builder.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a pair verbatim (identifiers, enums, numbers, booleans).
    pub(crate) fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a percent-encoded free-text pair.
    pub(crate) fn push_encoded(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), encode(value)));
        self
    }

    /// Append a comma-joined list pair; an empty list is omitted entirely.
    pub(crate) fn push_list(mut self, key: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.pairs.push((key.to_string(), values.join(",")));
        }
        self
    }

    /// Append a pair only when the value is set.
    pub(crate) fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append a percent-encoded pair only when the value is set.
    pub(crate) fn push_opt_encoded(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.push_encoded(key, value),
            None => self,
        }
    }

    /// Render `path?k=v&k2=v2`, or just `path` when no pair was kept.
    pub(crate) fn append_to(self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query: Vec<String> = self
            .pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{path}?{}", query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_ampersand_joined_in_insertion_order() {
        let path = QueryBuilder::new()
            .push("user_id", 17841_u64)
            .push("q", "coffee")
            .append_to("ig_hashtag_search");
        assert_eq!(path, "ig_hashtag_search?user_id=17841&q=coffee");
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let path = QueryBuilder::new()
            .push_list("fields", &["id".to_string(), "text".to_string()])
            .append_to("123456789");
        assert_eq!(path, "123456789?fields=id,text");
    }

    #[test]
    fn test_empty_list_is_omitted() {
        let path = QueryBuilder::new()
            .push_list("fields", &[])
            .append_to("123456789");
        assert_eq!(path, "123456789");
    }

    #[test]
    fn test_unset_optionals_are_omitted() {
        let path = QueryBuilder::new()
            .push("metric", "impressions")
            .push_opt("breakdown", None::<&str>)
            .append_to("1/insights");
        assert_eq!(path, "1/insights?metric=impressions");
    }

    #[test]
    fn test_free_text_is_percent_encoded() {
        let path = QueryBuilder::new()
            .push_encoded("message", "a b&c")
            .append_to("1/comments");
        assert_eq!(path, "1/comments?message=a%20b%26c");
    }

    #[test]
    fn test_identifiers_are_not_encoded() {
        let path = QueryBuilder::new()
            .push("fields", "business_discovery.username(thechef){id,name}")
            .append_to("17841");
        assert_eq!(
            path,
            "17841?fields=business_discovery.username(thechef){id,name}"
        );
    }

    #[test]
    fn test_encode_keeps_unreserved_characters() {
        assert_eq!(encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
        assert_eq!(encode("100% legit"), "100%25%20legit");
    }

    #[test]
    fn test_no_pairs_yields_bare_path() {
        assert_eq!(QueryBuilder::new().append_to("123/replies"), "123/replies");
    }

    #[test]
    fn test_field_selector_with_subfields() {
        let selector = field_selector(
            "business_discovery",
            "username",
            "thechef",
            &["id".to_string(), "followers_count".to_string()],
        );
        assert_eq!(
            selector,
            "business_discovery.username(thechef){id,followers_count}"
        );
    }

    #[test]
    fn test_field_selector_without_subfields() {
        let selector = field_selector("mentioned_media", "media_id", "17895", &[]);
        assert_eq!(selector, "mentioned_media.media_id(17895)");
    }
}
