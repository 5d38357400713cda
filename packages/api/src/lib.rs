//! Vitrine public API
//!
//! Filterable record list views over JSON collections: case-insensitive
//! free-text search plus facet selection, an expandable per-row JSONPath
//! payload inspector, and injection-safe tunnel deep links. Every user edit
//! re-derives the affected output synchronously from the untouched source
//! collection.
//!
//! [`Vitrine`] carries preconfigured builders for the two standard
//! collections; [`RecordListViewBuilder`] configures everything by hand.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod view;

pub use view::{DEFAULT_PAGE_SIZE, DetailPanel, RecordListView, RecordListViewBuilder};

// Engine surface from the client package
pub use vitrine_client::jsonpath::{self, PathQuery, QueryOutcome};
pub use vitrine_client::tunnel::{self, LinkError, TunnelEndpoint, validate_ip, validate_user};
pub use vitrine_client::{
    Backend, DEFAULT_TUNNEL_USER, FilterState, Instance, PathError, Record, RecordFilter,
};

/// Entry point with preconfigured view builders
pub struct Vitrine;

impl Vitrine {
    /// Builder preconfigured for the instances collection: the standard
    /// columns, backend-name facets, and tunnel addresses from `private_ip`
    #[must_use]
    pub fn instances() -> RecordListViewBuilder {
        RecordListViewBuilder::new()
            .columns(Instance::COLUMNS)
            .facet_field("backend_name")
            .address_field("private_ip")
    }

    /// Builder preconfigured for the backends collection
    #[must_use]
    pub fn backends() -> RecordListViewBuilder {
        RecordListViewBuilder::new().columns(Backend::COLUMNS)
    }

    /// Builder with nothing preconfigured, for ad-hoc collections
    #[must_use]
    pub fn records() -> RecordListViewBuilder {
        RecordListViewBuilder::new()
    }
}
