//! The accumulated query parameter mapping sent to `GET /accounts`.

use url::Url;

use super::{encode_query_data, FilterField, PageSize, ParamValue, SortColumn, SortDirection};

pub const PAGE_KEY: &str = "_page";
pub const LIMIT_KEY: &str = "_limit";
pub const SORT_KEY: &str = "_sort";
pub const ORDER_KEY: &str = "_order";
const LIKE_SUFFIX: &str = "_like";

/// Ordered mapping from parameter name to scalar value.
///
/// Setting an existing key replaces its value in place, so encoding order is
/// the order keys were first introduced. At most one `{field}_like` key is
/// present when filters are set through [`QueryParameters::set_like_filter`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, ParamValue)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.set_page(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.set(LIMIT_KEY, page_size.get());
        self
    }

    /// Sets the sort column and direction.
    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.set_sort(column, direction);
        self
    }

    /// Sets a substring filter on `field`, replacing any other filter.
    pub fn with_like_filter(mut self, field: FilterField, text: &str) -> Self {
        self.set_like_filter(field, text);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(idx) => self.pairs[idx].1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Shallow merge: keys from `other` overwrite, new keys are appended.
    pub fn merge(&mut self, other: QueryParameters) {
        for (key, value) in other.pairs {
            self.set(key, value);
        }
    }

    pub fn set_page(&mut self, page: i64) {
        self.set(PAGE_KEY, page);
    }

    pub fn page(&self) -> Option<i64> {
        self.get(PAGE_KEY).and_then(ParamValue::as_i64)
    }

    pub fn limit(&self) -> Option<i64> {
        self.get(LIMIT_KEY).and_then(ParamValue::as_i64)
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.set(SORT_KEY, column.key());
        self.set(ORDER_KEY, direction.as_str());
    }

    pub fn order(&self) -> Option<SortDirection> {
        match self.get(ORDER_KEY)? {
            ParamValue::Text(s) => s.parse().ok(),
            ParamValue::Int(_) => None,
        }
    }

    /// Keys of all substring filters currently present.
    pub fn like_keys(&self) -> impl Iterator<Item = &str> {
        self.pairs
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.ends_with(LIKE_SUFFIX))
    }

    /// Drops every `_like` key, keeping pagination and sort parameters.
    /// Returns how many keys were removed.
    pub fn clear_like_filters(&mut self) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| !k.ends_with(LIKE_SUFFIX));
        before - self.pairs.len()
    }

    /// Replaces any existing filter with `{field}_like = text`.
    pub fn set_like_filter(&mut self, field: FilterField, text: &str) {
        let key = field.like_key();
        self.pairs
            .retain(|(k, _)| !k.ends_with(LIKE_SUFFIX) || *k == key);
        self.set(key, text);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the mapping as a query string (see [`encode_query_data`]).
    pub fn encode(&self) -> String {
        encode_query_data(self)
    }

    /// Returns `url` with its query replaced by this mapping.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
        url
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParameters::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
