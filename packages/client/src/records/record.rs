//! The record seam between typed rows and the engines

use std::borrow::Cow;

use serde_json::{Map, Value};

/// One displayed row of a record collection
///
/// The engines need identity, display-text access, and the nested payload,
/// nothing else, so collections can be typed rows or raw JSON objects alike.
pub trait Record {
    /// Stable identity of the record within its collection
    fn id(&self) -> Cow<'_, str>;

    /// A named field rendered as display text
    ///
    /// Returns `None` when the field is absent or not string-typed; only
    /// string-typed fields participate in free-text matching.
    fn text_field(&self, field: &str) -> Option<Cow<'_, str>>;

    /// The nested payload behind the row, when the collection carries one
    fn raw(&self) -> Option<&Value>;
}

impl Record for Map<String, Value> {
    fn id(&self) -> Cow<'_, str> {
        match self.get("id") {
            Some(Value::String(id)) => Cow::Borrowed(id.as_str()),
            Some(Value::Number(id)) => Cow::Owned(id.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    fn text_field(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.get(field) {
            Some(Value::String(text)) => Some(Cow::Borrowed(text.as_str())),
            _ => None,
        }
    }

    fn raw(&self) -> Option<&Value> {
        self.get("raw")
    }
}
