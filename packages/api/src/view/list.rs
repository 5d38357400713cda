//! Filterable record list with expandable detail panels

use std::collections::BTreeMap;

use vitrine_client::records::Record;
use vitrine_client::{FilterState, RecordFilter, TunnelEndpoint};

use super::panel::DetailPanel;

/// Rows shown per page until configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A filterable, pageable view over one record collection
///
/// The view owns a snapshot of the collection and re-derives everything
/// visible from it synchronously on each edit: the filtered row set, the
/// current page window, and any open detail panels. The source rows are
/// never mutated; a fresh collection arrives through
/// [`RecordListView::replace_records`].
#[derive(Debug, Clone)]
pub struct RecordListView<R: Record> {
    records: Vec<R>,
    columns: Vec<String>,
    filter: RecordFilter,
    state: FilterState,
    facet_options: Vec<String>,
    visible: Vec<usize>,
    panels: BTreeMap<String, DetailPanel>,
    tunnel: Option<TunnelEndpoint>,
    tunnel_user: String,
    address_field: String,
    page: usize,
    per_page: usize,
}

impl<R: Record> RecordListView<R> {
    /// Create a view over `records` with the given display columns and
    /// filter configuration
    #[must_use]
    pub fn new(records: Vec<R>, columns: Vec<String>, filter: RecordFilter) -> Self {
        let mut view = Self {
            records,
            columns,
            filter,
            state: FilterState::default(),
            facet_options: Vec::new(),
            visible: Vec::new(),
            panels: BTreeMap::new(),
            tunnel: None,
            tunnel_user: vitrine_client::DEFAULT_TUNNEL_USER.to_string(),
            address_field: String::new(),
            page: 0,
            per_page: DEFAULT_PAGE_SIZE,
        };
        view.refresh();
        view
    }

    // Collection access

    /// The untouched source collection
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Displayed column order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The filter configuration this view applies
    #[must_use]
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    /// Current filter inputs
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Selectable facet values, in the order they were supplied
    #[must_use]
    pub fn facet_options(&self) -> &[String] {
        &self.facet_options
    }

    /// Look up a record by id
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    // Filter edits

    /// Replace the free-text filter, as typed so far
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
        self.refresh();
    }

    /// Toggle one facet value in or out of the selection
    pub fn toggle_facet(&mut self, value: &str) {
        if !self.state.facets.remove(value) {
            self.state.facets.insert(value.to_string());
        }
        self.refresh();
    }

    /// Replace the whole facet selection
    pub fn set_facets<I, S>(&mut self, facets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.facets = facets.into_iter().map(Into::into).collect();
        self.refresh();
    }

    /// Reset both filter inputs to pass-through
    pub fn clear_filters(&mut self) {
        self.state = FilterState::default();
        self.refresh();
    }

    // Collection updates

    /// Swap in a freshly fetched collection
    ///
    /// Panels for rows that no longer exist are dropped; surviving panels
    /// re-run their expression against the row's new payload.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        let ids: std::collections::BTreeSet<String> = self
            .records
            .iter()
            .map(|record| record.id().into_owned())
            .collect();
        self.panels.retain(|id, _| ids.contains(id));
        for (id, panel) in &mut self.panels {
            let record = self.records.iter().find(|record| record.id() == id.as_str());
            let path = panel.path().to_string();
            panel.update(record.and_then(Record::raw), &path);
        }
        self.refresh();
    }

    /// Replace the selectable facet values
    ///
    /// The current selection is left alone even if it references values that
    /// vanished from the option set; it keeps filtering until deselected.
    pub fn replace_facet_options(&mut self, options: Vec<String>) {
        self.facet_options = options;
    }

    // Visible rows and paging

    /// Filtered rows in collection order
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        self.visible.iter().map(|&index| &self.records[index]).collect()
    }

    /// Number of rows passing the current filter
    #[must_use]
    pub fn total_visible(&self) -> usize {
        self.visible.len()
    }

    /// Filtered rows on the current page
    #[must_use]
    pub fn page_records(&self) -> Vec<&R> {
        self.visible
            .iter()
            .skip(self.page * self.per_page)
            .take(self.per_page)
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Zero-based current page
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages under the current filter; zero when nothing matches
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.per_page)
    }

    /// Jump to a page, clamped to the last one
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// Change the page size; the current page is re-clamped
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.set_page(self.page);
    }

    // Detail panels

    /// Expand a row, opening its detail panel on the identity query
    ///
    /// Expanding an already open row keeps its state. Returns `false` for an
    /// unknown id.
    pub fn expand(&mut self, id: &str) -> bool {
        if self.panels.contains_key(id) {
            return true;
        }
        let Some(panel) = self.record(id).map(|record| DetailPanel::open(record.raw())) else {
            return false;
        };
        self.panels.insert(id.to_string(), panel);
        tracing::debug!(target: "vitrine::view", id, "row expanded");
        true
    }

    /// Collapse a row, discarding its panel state
    ///
    /// Returns `false` when the row was not expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        let collapsed = self.panels.remove(id).is_some();
        if collapsed {
            tracing::debug!(target: "vitrine::view", id, "row collapsed");
        }
        collapsed
    }

    /// Whether a row's panel is open
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    /// The open panel for a row, if expanded
    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&DetailPanel> {
        self.panels.get(id)
    }

    /// Re-run a row's panel with an edited path expression
    ///
    /// A no-op returning `false` while the row is collapsed.
    pub fn set_panel_path(&mut self, id: &str, path: &str) -> bool {
        let Some(panel) = self.panels.get_mut(id) else {
            return false;
        };
        let record = self.records.iter().find(|record| record.id() == id);
        panel.update(record.and_then(Record::raw), path);
        tracing::debug!(
            target: "vitrine::view",
            id,
            path,
            matches = panel.values().len(),
            rejected = panel.outcome().is_invalid(),
            "panel expression re-evaluated"
        );
        true
    }

    // Tunnel links

    /// Point row actions at a tunnel endpoint
    pub fn set_tunnel(&mut self, tunnel: Option<TunnelEndpoint>) {
        self.tunnel = tunnel;
    }

    /// The configured tunnel endpoint
    #[must_use]
    pub fn tunnel(&self) -> Option<&TunnelEndpoint> {
        self.tunnel.as_ref()
    }

    /// Replace the user the links authenticate as; surrounding whitespace is
    /// dropped
    pub fn set_tunnel_user(&mut self, user: impl Into<String>) {
        self.tunnel_user = user.into().trim().to_string();
    }

    /// The user the links authenticate as
    #[must_use]
    pub fn tunnel_user(&self) -> &str {
        &self.tunnel_user
    }

    /// Pick which record field supplies the link's address
    pub fn set_address_field(&mut self, field: impl Into<String>) {
        self.address_field = field.into();
    }

    /// The record field supplying the link's address
    #[must_use]
    pub fn address_field(&self) -> &str {
        &self.address_field
    }

    /// Deep link for one row using the view's tunnel user
    ///
    /// `None` without a configured endpoint, for an unknown id, or when the
    /// row has no address in the configured field.
    #[must_use]
    pub fn tunnel_link(&self, id: &str) -> Option<String> {
        self.tunnel_link_as(id, &self.tunnel_user)
    }

    /// Deep link for one row as a specific user
    #[must_use]
    pub fn tunnel_link_as(&self, id: &str, user: &str) -> Option<String> {
        let endpoint = self.tunnel.as_ref()?;
        let record = self.record(id)?;
        let address = record.text_field(&self.address_field)?;
        if address.is_empty() {
            return None;
        }
        Some(endpoint.link(user.trim(), &address))
    }

    /// Re-derive the visible row set and clamp the page window
    fn refresh(&mut self) {
        let visible: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(*record, &self.state))
            .map(|(index, _)| index)
            .collect();
        self.visible = visible;
        self.page = self.page.min(self.page_count().saturating_sub(1));
        tracing::debug!(
            target: "vitrine::view",
            visible = self.visible.len(),
            total = self.records.len(),
            "visible rows re-derived"
        );
    }
}
