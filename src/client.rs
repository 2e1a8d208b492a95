// ABOUTME: Capability traits for the injected HTTP/RDF client
// ABOUTME: WebClient, WebResource, and Graph seams plus request plumbing types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

//! The collaborator seam.
//!
//! This crate performs no HTTP and parses no RDF itself. Every operation is
//! written against the traits in this module; implementers provide a concrete
//! adapter per target HTTP/RDF library and hand it to [`list`](crate::list),
//! [`send`](crate::send), or [`discover_inbox_uri`](crate::discover_inbox_uri).
//!
//! Adapters are responsible for wrapping their own failures with
//! [`LdnError::transport`](crate::LdnError::transport) and
//! [`LdnError::parse`](crate::LdnError::parse) so the operations can
//! propagate them unchanged.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`; one client instance may serve many
//! concurrent calls, each of which runs its own strictly sequential request
//! chain.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::errors::LdnResult;

/// HTTP method forwarded to [`WebClient::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
}

impl HttpMethod {
    /// Wire representation of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request header overrides passed to the client.
///
/// Only headers the LDN operations actually set get convenience
/// constructors; anything else goes through [`RequestOptions::header`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Header name → value, applied on top of the client's defaults.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Empty options: the client's defaults apply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying a single `Accept` header.
    #[must_use]
    pub fn accept(value: &str) -> Self {
        Self::new().header("Accept", value)
    }

    /// Options carrying a single `Content-Type` header.
    #[must_use]
    pub fn content_type(value: &str) -> Self {
        Self::new().header("Content-Type", value)
    }

    /// Add a header, replacing any previous value for the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// One RDF statement from a matched graph query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Subject IRI or blank node label
    pub subject: String,
    /// Predicate IRI
    pub predicate: String,
    /// Object value (IRI, blank node label, or literal lexical form)
    pub object: String,
}

/// A queryable RDF graph parsed from a response body.
pub trait Graph: Send + Sync {
    /// Return every triple matching the pattern. `None` positions are
    /// wildcards; the predicate is always constrained.
    ///
    /// Match order is whatever the underlying store yields. Callers must
    /// treat it as unordered and not rely on which triple comes first when
    /// several match.
    fn matches(
        &self,
        subject: Option<&str>,
        predicate: &str,
        object: Option<&str>,
    ) -> Vec<Triple>;
}

/// A fetched-and-parsed HTTP response.
///
/// Each instance belongs to exactly one operation call; nothing in this
/// crate retains a resource beyond the call that fetched it.
pub trait WebResource: Send + Sync {
    /// Graph type produced by [`WebResource::parsed_graph`].
    type Graph: Graph;

    /// Link relations from the response's `Link` headers: relation-type IRI
    /// mapped to target URI.
    fn link_headers(&self) -> &HashMap<String, String>;

    /// Parse the body into an RDF graph. Called lazily: discovery only
    /// reaches for the graph when the `Link` headers held no inbox relation.
    ///
    /// # Errors
    ///
    /// Returns the adapter's parse failure, wrapped via
    /// [`LdnError::parse`](crate::LdnError::parse).
    fn parsed_graph(&self) -> LdnResult<Self::Graph>;

    /// Member URIs of this resource when it is an LDP container (the keys of
    /// its containment mapping). Unordered; empty for non-containers.
    fn resources(&self) -> Vec<String>;
}

/// The injected HTTP client capability set.
#[async_trait]
pub trait WebClient: Send + Sync {
    /// Response type produced by this client.
    type Resource: WebResource;

    /// Perform an HTTP GET against `uri`, applying the headers in
    /// `options`.
    ///
    /// # Errors
    ///
    /// Returns the adapter's failure wrapped via
    /// [`LdnError::transport`](crate::LdnError::transport).
    async fn fetch(&self, uri: &str, options: RequestOptions) -> LdnResult<Self::Resource>;

    /// Perform an arbitrary HTTP request against `uri` with a body. Used by
    /// [`send`](crate::send) for notification POSTs.
    ///
    /// # Errors
    ///
    /// Returns the adapter's failure wrapped via
    /// [`LdnError::transport`](crate::LdnError::transport).
    async fn request(
        &self,
        uri: &str,
        method: HttpMethod,
        options: RequestOptions,
        body: String,
    ) -> LdnResult<Self::Resource>;
}
