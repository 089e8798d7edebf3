//! Request envelope and decision model.
//!
//! Both carriers are constructed fresh per request, populated synchronously
//! inside a single hook invocation, and discarded once the dispatcher has
//! consumed the returned value. Neither is shared across requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mutable, insertion-ordered mapping carrying request parameters or error
/// details through the lifecycle hooks.
///
/// Keys are unique; inserting an existing key replaces the previous value.
/// Serializes transparently as a JSON object, preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataWrapper(Map<String, Value>);

impl DataWrapper {
    /// Creates an empty envelope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an envelope from a raw query string (`a=1&b=two`).
    ///
    /// Percent-encoded pairs are decoded; all values land as JSON strings.
    /// `None` or an empty query yields an empty envelope.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut envelope = Self::new();
        if let Some(q) = query {
            for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
                envelope.put(key.into_owned(), Value::String(value.into_owned()));
            }
        }
        envelope
    }

    /// Inserts a key/value pair, returning the previous value if the key
    /// was already present.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Key checked by the dispatcher to decide whether a request may proceed.
pub const PASS_KEY: &str = "PASS";

/// Value signalling a grant under [`PASS_KEY`].
pub const PASS_GRANTED: &str = "Y";

/// Read-mostly mapping returned from `pre_handle` and `authorize` to signal
/// a decision.
///
/// A model is a *pass* when it carries `{"PASS": "Y"}`; any other shape is a
/// refusal and is returned to the client as the response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataModel(Map<String, Value>);

impl DataModel {
    /// The constant grant: `{"PASS": "Y"}`.
    pub fn pass() -> Self {
        let mut map = Map::new();
        map.insert(PASS_KEY.to_string(), Value::String(PASS_GRANTED.to_string()));
        Self(map)
    }

    /// A refusal: `{"PASS": "N"}`.
    pub fn deny() -> Self {
        let mut map = Map::new();
        map.insert(PASS_KEY.to_string(), Value::String("N".to_string()));
        Self(map)
    }

    /// Whether this model grants the request.
    pub fn is_pass(&self) -> bool {
        self.0.get(PASS_KEY).and_then(Value::as_str) == Some(PASS_GRANTED)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<DataWrapper> for DataModel {
    fn from(wrapper: DataWrapper) -> Self {
        Self(wrapper.into_inner())
    }
}
