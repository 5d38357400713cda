//! Terminal tunnel deep links
//!
//! Builds the `?user=<user>&ip=<ip>` link a row action navigates to. Both
//! parameters are user- or backend-controlled text, so they are always
//! percent-encoded before interpolation. [`validate_user`] and
//! [`validate_ip`] mirror the endpoint's server-side rules for early
//! feedback; they never gate link construction.

use std::net::IpAddr;

use thiserror::Error;
use url::Url;

/// Fixed default for the editable tunnel user field
pub const DEFAULT_TUNNEL_USER: &str = "admin";

/// Errors from tunnel endpoint configuration and preflight validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The configured endpoint is unusable
    #[error("invalid tunnel endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint text
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },
    /// The user field fails the endpoint's rules
    #[error("invalid tunnel user `{0}`: expected 4 to 32 alphanumeric characters")]
    InvalidUser(String),
    /// The address field does not parse as an IP address
    #[error("invalid tunnel address `{0}`: expected an IP address")]
    InvalidAddress(String),
}

/// Tunnel endpoint the per-row action links to
///
/// The endpoint may be an absolute URL or a path relative to the embedding
/// page, matching how the collections themselves are addressed. It must not
/// carry a query or fragment of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelEndpoint {
    base: String,
}

impl TunnelEndpoint {
    /// Configure the endpoint links point at
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidEndpoint`] when the endpoint is empty,
    /// already carries a query or fragment, or is an absolute URL that fails
    /// to parse.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LinkError> {
        let base = endpoint.into();
        if base.is_empty() {
            return Err(LinkError::InvalidEndpoint {
                endpoint: base,
                reason: "endpoint is empty".into(),
            });
        }
        if base.contains('?') || base.contains('#') {
            return Err(LinkError::InvalidEndpoint {
                endpoint: base.clone(),
                reason: "endpoint must not carry a query or fragment".into(),
            });
        }
        if base.contains("://")
            && let Err(error) = Url::parse(&base)
        {
            return Err(LinkError::InvalidEndpoint {
                endpoint: base.clone(),
                reason: error.to_string(),
            });
        }
        Ok(Self { base })
    }

    /// The configured endpoint text
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build the deep link for one row
    ///
    /// `user` and `ip` are percent-encoded into the query string, so the
    /// result re-parses to exactly one `user` and one `ip` parameter
    /// carrying the original values.
    #[must_use]
    pub fn link(&self, user: &str, ip: &str) -> String {
        format!(
            "{}?user={}&ip={}",
            self.base,
            urlencoding::encode(user),
            urlencoding::encode(ip)
        )
    }
}

/// Preflight check mirroring the endpoint's rule for the user field: 4 to 32
/// alphanumeric characters
///
/// # Errors
///
/// Returns [`LinkError::InvalidUser`] when the field would be rejected
/// server-side.
pub fn validate_user(user: &str) -> Result<(), LinkError> {
    let length = user.chars().count();
    if (4..=32).contains(&length) && user.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(LinkError::InvalidUser(user.to_string()))
    }
}

/// Preflight check that the address parses as an IP address
///
/// # Errors
///
/// Returns [`LinkError::InvalidAddress`] when the field would be rejected
/// server-side.
pub fn validate_ip(ip: &str) -> Result<(), LinkError> {
    ip.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| LinkError::InvalidAddress(ip.to_string()))
}
