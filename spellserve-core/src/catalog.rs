use indexmap::IndexMap;
use serde::Serialize;

/// Static listing of the public endpoints, keyed by logical name.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndpointCatalog(IndexMap<&'static str, &'static str>);

impl EndpointCatalog {
    /// The catalog served by the root endpoint.
    #[must_use]
    pub fn standard() -> Self {
        Self(IndexMap::from([("suggest", "/suggest?q={query}")]))
    }

    /// URL template for the endpoint called `name`, if listed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0.get(name).copied()
    }

    /// Number of listed endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if no endpoints are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
