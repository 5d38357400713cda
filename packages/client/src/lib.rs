//! Vitrine client engines
//!
//! The in-memory engines behind the vitrine record browser: JSONPath-subset
//! payload querying for the per-row inspector, free-text plus facet
//! filtering over displayed collections, the typed record model, and
//! injection-safe tunnel deep links. The `vitrine` package layers the list
//! view wiring on top of these.
//!
//! Everything here is synchronous and purely in-memory. Collections arrive
//! already materialized; every user edit re-derives the dependent outputs
//! from the untouched source data.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod filter;
pub mod jsonpath;
pub mod records;
pub mod tunnel;

pub mod prelude;

pub use crate::jsonpath::{evaluate, query};
pub use crate::prelude::*;
