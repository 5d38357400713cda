//! List view wiring over the engine layer
//!
//! A [`RecordListView`] holds one collection snapshot and the user's current
//! inputs, and re-derives the visible rows, page window, and open detail
//! panels synchronously whenever an input changes. Nothing here blocks or
//! talks to the network; fetching collections is the embedder's job.

mod builder;
mod list;
mod panel;

pub use self::builder::RecordListViewBuilder;
pub use self::list::{DEFAULT_PAGE_SIZE, RecordListView};
pub use self::panel::DetailPanel;
