//! Backend records supplying the facet value domain

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::Record;

/// One configured backend row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Synthetic row identity assigned by the collection
    #[serde(default)]
    pub id: u64,
    /// Backend name; instance rows carry it as their facet value
    pub name: String,
    /// Backend type
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Backend {
    /// Column order of the backends list
    pub const COLUMNS: [&'static str; 2] = ["name", "type"];

    /// Facet option domain carried by a backends collection
    #[must_use]
    pub fn names(backends: &[Backend]) -> Vec<String> {
        backends.iter().map(|backend| backend.name.clone()).collect()
    }
}

impl Record for Backend {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn text_field(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "type" => Some(Cow::Borrowed(self.kind.as_str())),
            _ => None,
        }
    }

    fn raw(&self) -> Option<&Value> {
        None
    }
}
