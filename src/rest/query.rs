//! Query string construction.

use std::fmt::Display;

use url::form_urlencoded;

/// Ordered query parameters for a Bleutrade request.
///
/// Parameters keep their insertion order so the composed URL, and therefore
/// its signature, is reproducible. Values are converted with [`Display`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append every parameter of `other`, keeping its order.
    pub fn extend(mut self, other: &QueryParams) -> Self {
        self.pairs.extend(other.pairs.iter().cloned());
        self
    }

    /// Whether no parameter has been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Render as `&key=value` for every entry, form-urlencoded.
    ///
    /// Empty parameters render as an empty string.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.pairs {
            query.push('&');
            query.extend(form_urlencoded::byte_serialize(key.as_bytes()));
            query.push('=');
            query.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
        query
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(QueryParams::new(), |params, (k, v)| params.push(k, v))
    }
}

/// Join `base` and `path`, introducing the query with `?`.
pub(crate) fn compose_url(base: &str, path: &str, query: &str) -> String {
    let mut url = format!("{base}{path}");
    if let Some(rest) = query.strip_prefix('&') {
        url.push('?');
        url.push_str(rest);
    }
    url
}
