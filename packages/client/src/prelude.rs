//! Vitrine client prelude
//!
//! The types an embedder needs to wire up collections, filtering, and the
//! payload inspector. Only canonical public API types belong here.

// Record model
pub use crate::records::{Backend, Instance, Record};

// Filtering
pub use crate::filter::{FilterState, RecordFilter};

// Path querying for the payload inspector
pub use crate::jsonpath::{self, PathError, PathQuery, PathResult, QueryOutcome};

// Tunnel deep links
pub use crate::tunnel::{DEFAULT_TUNNEL_USER, LinkError, TunnelEndpoint};
