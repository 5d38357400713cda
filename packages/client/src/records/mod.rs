//! Record model for the displayed collections
//!
//! Two typed collections arrive from the data layer: instances (the primary
//! list) and backends (the facet domain). Both implement the [`Record`]
//! seam, as do raw `serde_json` objects for collections without a typed
//! shape.

mod backend;
mod instance;
mod record;

pub use self::backend::Backend;
pub use self::instance::Instance;
pub use self::record::Record;
