//! Free-text and facet filtering over record collections
//!
//! Implements the list filter bar: a case-insensitive substring match across
//! the displayed string-typed fields combined with a multi-select facet
//! constraint. Empty inputs pass every record through. The facet option
//! domain is supplied externally (from the backends collection), never
//! computed from the records being filtered.

mod engine;
mod state;

pub use self::engine::RecordFilter;
pub use self::state::FilterState;
