//! Instance records delivered by the instances collection

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::Record;

/// One machine row as delivered by the instances collection
///
/// Rows are immutable snapshots. Views never edit them in place; an updated
/// collection arrives wholesale and everything derived is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Stable row identity
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Name of the backend the instance was discovered through
    #[serde(default)]
    pub backend_name: String,
    /// Private network address
    #[serde(default)]
    pub private_ip: String,
    /// Public network address
    #[serde(default)]
    pub public_ip: String,
    /// Lifecycle status as reported by the backend
    #[serde(default)]
    pub status: String,
    /// Machine type or size
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Untouched backend payload, inspected by the detail panel
    #[serde(default)]
    pub raw: Value,
}

impl Instance {
    /// Column order of the instances list
    pub const COLUMNS: [&'static str; 7] = [
        "id",
        "name",
        "backend_name",
        "private_ip",
        "public_ip",
        "status",
        "type",
    ];

    /// Displayed value of a named column
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "backend_name" => Some(&self.backend_name),
            "private_ip" => Some(&self.private_ip),
            "public_ip" => Some(&self.public_ip),
            "status" => Some(&self.status),
            "type" => Some(&self.kind),
            _ => None,
        }
    }
}

impl Record for Instance {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn text_field(&self, field: &str) -> Option<Cow<'_, str>> {
        self.field(field).map(Cow::Borrowed)
    }

    fn raw(&self) -> Option<&Value> {
        Some(&self.raw)
    }
}
