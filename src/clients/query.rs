//! Query parameter handling for API requests.
//!
//! This module provides the [`QueryParams`] type, an insertion-ordered
//! mapping of query parameter names to values with canonical encoding.
//!
//! # Ordering
//!
//! ShipStation endpoints accept parameters in any order, but the encoded
//! string must be deterministic: pairs appear in insertion order and no
//! sorting is performed. A hash map would not give that guarantee, so the
//! pairs are kept in a plain vector.

/// An ordered collection of query parameters.
///
/// Parameters are encoded in insertion order. Both keys and values are
/// percent-encoded when the query string is produced.
///
/// # Example
///
/// ```rust
/// use shipstation_api::QueryParams;
///
/// let query = QueryParams::new()
///     .param("orderStatus", "awaiting_shipment")
///     .param("storeId", "12345");
///
/// assert_eq!(
///     query.to_query_string(),
///     "?orderStatus=awaiting_shipment&storeId=12345"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter, consuming and returning the collection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::QueryParams;
    ///
    /// let query = QueryParams::new().param("carrierCode", "fedex");
    /// assert_eq!(query.to_query_string(), "?carrierCode=fedex");
    /// ```
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Returns `true` if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Produces the encoded query string.
    ///
    /// Every key and value is percent-encoded, pairs are joined with `&`,
    /// and the result is prefixed with `?`. An empty collection produces
    /// an empty string with no `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();

        format!("?{}", encoded.join("&"))
    }

    /// Iterates over the parameter pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}
