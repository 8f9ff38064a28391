use serde_json::{Map, Value};

/// A decoded config document: the string-keyed mapping stored under
/// `widgetConfig` in the shared container.
///
/// Nothing is validated up front.  Every read goes through a [`Section`]
/// extractor that yields `None` when a key is missing or holds a value of the
/// wrong type, so callers decide the fallback at each step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    root: Map<String, Value>,
}

impl RawDocument {
    /// Wrap a decoded JSON value.  Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Read-only view over the top level of the document.
    pub fn root(&self) -> Section<'_> {
        Section { map: &self.root }
    }

    /// `data.initialData`: content to show before the host pushes any.
    pub fn initial_data(&self) -> Option<&Map<String, Value>> {
        self.root
            .get("data")
            .and_then(Value::as_object)?
            .get("initialData")
            .and_then(Value::as_object)
    }
}

/// Borrowed view over one nested mapping of a [`RawDocument`].
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Nested mapping under `key`.
    pub fn section(&self, key: &str) -> Option<Section<'a>> {
        self.map.get(key).and_then(Value::as_object).map(Section::new)
    }

    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// Any JSON number, integral or not.  Booleans are not numbers.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.map.get(key).and_then(Value::as_f64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.map.get(key).and_then(Value::as_bool)
    }

    /// A non-negative whole number.  `60.0` is accepted, `60.5` and `-1` are not.
    pub fn whole_number(&self, key: &str) -> Option<u64> {
        let value = self.map.get(key)?;
        if let Some(n) = value.as_u64() {
            return Some(n);
        }
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    }

    /// An array whose elements are all strings.  A single non-string element
    /// makes the whole list unreadable.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.map
            .get(key)
            .and_then(Value::as_array)?
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }
}
