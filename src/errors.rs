// ABOUTME: Unified error type for LDN client operations
// ABOUTME: Configuration, discovery, and adapter transport/parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

//! Error handling for LDN operations.
//!
//! Three kinds of failure surface from this crate:
//! - configuration errors ([`LdnError::MissingWebClient`]), raised before any
//!   I/O is attempted;
//! - discovery failures ([`LdnError::NoInboxFound`]), raised only after both
//!   the link-header and body-triple strategies are exhausted;
//! - transport and parse failures originating in the injected client,
//!   propagated unchanged by the operations in this crate.
//!
//! Nothing is retried or swallowed internally.

use thiserror::Error;

/// Boxed source error carried by adapter-originated failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type used throughout the crate.
pub type LdnResult<T> = Result<T, LdnError>;

/// Errors produced by LDN discovery, listing, and sending.
#[derive(Debug, Error)]
pub enum LdnError {
    /// `list` or `send` was called without a web client in its options.
    /// Raised before any network request is issued.
    #[error("web client instance is required")]
    MissingWebClient,

    /// Neither a `Link` header nor a body triple declared an inbox for the
    /// resource.
    #[error("no inbox uri found for resource {uri}")]
    NoInboxFound {
        /// URI of the resource that was inspected
        uri: String,
    },

    /// An HTTP request performed by the injected client failed. Constructed
    /// by client adapters, never by this crate.
    #[error("request to {uri} failed: {source}")]
    Transport {
        /// URI the failed request targeted
        uri: String,
        /// Underlying client error
        #[source]
        source: BoxError,
    },

    /// The injected client failed to parse a response body into an RDF
    /// graph. Constructed by client adapters, never by this crate.
    #[error("failed to parse body of {uri}: {source}")]
    Parse {
        /// URI of the resource whose body could not be parsed
        uri: String,
        /// Underlying parser error
        #[source]
        source: BoxError,
    },
}

impl LdnError {
    /// Discovery exhausted both lookup strategies for `uri`.
    #[must_use]
    pub fn no_inbox_found(uri: impl Into<String>) -> Self {
        Self::NoInboxFound { uri: uri.into() }
    }

    /// Wrap an adapter's HTTP failure for `uri`.
    #[must_use]
    pub fn transport(uri: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            uri: uri.into(),
            source: source.into(),
        }
    }

    /// Wrap an adapter's body-parse failure for `uri`.
    #[must_use]
    pub fn parse(uri: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            uri: uri.into(),
            source: source.into(),
        }
    }
}
