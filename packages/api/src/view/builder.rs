//! Builder-based construction of record list views

use vitrine_client::records::Record;
use vitrine_client::{Backend, RecordFilter, TunnelEndpoint};

use super::list::{DEFAULT_PAGE_SIZE, RecordListView};

/// Builder for [`RecordListView`]
///
/// Free-text matching defaults to the displayed columns; pass
/// [`RecordListViewBuilder::text_fields`] to search a different set.
#[derive(Debug, Clone)]
pub struct RecordListViewBuilder {
    columns: Vec<String>,
    text_fields: Option<Vec<String>>,
    facet_field: String,
    facet_options: Vec<String>,
    address_field: String,
    tunnel: Option<TunnelEndpoint>,
    tunnel_user: String,
    per_page: usize,
}

impl Default for RecordListViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordListViewBuilder {
    /// Start from a configuration with no columns, facet field, or tunnel
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            text_fields: None,
            facet_field: String::new(),
            facet_options: Vec::new(),
            address_field: String::new(),
            tunnel: None,
            tunnel_user: vitrine_client::DEFAULT_TUNNEL_USER.to_string(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Displayed column order; free-text matching follows it by default
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict free-text matching to an explicit field set
    #[must_use]
    pub fn text_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Field the facet selection constrains
    #[must_use]
    pub fn facet_field(mut self, field: impl Into<String>) -> Self {
        self.facet_field = field.into();
        self
    }

    /// Selectable facet values
    #[must_use]
    pub fn facet_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facet_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Selectable facet values taken from a backends collection
    #[must_use]
    pub fn facet_options_from(self, backends: &[Backend]) -> Self {
        self.facet_options(Backend::names(backends))
    }

    /// Record field supplying the tunnel link address
    #[must_use]
    pub fn address_field(mut self, field: impl Into<String>) -> Self {
        self.address_field = field.into();
        self
    }

    /// Tunnel endpoint row actions link to
    #[must_use]
    pub fn tunnel(mut self, endpoint: TunnelEndpoint) -> Self {
        self.tunnel = Some(endpoint);
        self
    }

    /// Tunnel endpoint parsed from text
    ///
    /// An unusable endpoint is logged and skipped, leaving the view without
    /// row actions rather than failing construction.
    #[must_use]
    pub fn tunnel_endpoint(mut self, endpoint: &str) -> Self {
        match TunnelEndpoint::new(endpoint) {
            Ok(parsed) => self.tunnel = Some(parsed),
            Err(error) => {
                tracing::warn!(
                    target: "vitrine::view",
                    endpoint,
                    error = %error,
                    "tunnel endpoint rejected, row actions disabled"
                );
            }
        }
        self
    }

    /// User the tunnel links authenticate as
    #[must_use]
    pub fn tunnel_user(mut self, user: impl Into<String>) -> Self {
        self.tunnel_user = user.into();
        self
    }

    /// Rows per page
    #[must_use]
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Build an empty view; records arrive later via
    /// [`RecordListView::replace_records`]
    #[must_use]
    pub fn build<R: Record>(self) -> RecordListView<R> {
        self.build_with(Vec::new())
    }

    /// Build a view over an already fetched collection
    #[must_use]
    pub fn build_with<R: Record>(self, records: Vec<R>) -> RecordListView<R> {
        let text_fields = self.text_fields.unwrap_or_else(|| self.columns.clone());
        let filter = RecordFilter::new(text_fields, self.facet_field);
        let mut view = RecordListView::new(records, self.columns, filter);
        view.replace_facet_options(self.facet_options);
        view.set_address_field(self.address_field);
        view.set_tunnel(self.tunnel);
        view.set_tunnel_user(self.tunnel_user);
        view.set_per_page(self.per_page);
        view
    }
}
