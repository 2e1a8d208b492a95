// ABOUTME: Inbox listing and notification delivery operations
// ABOUTME: ListOptions/SendOptions config structs and the list/send pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

//! Listing and sending.
//!
//! Both operations share the same resolution step: use the inbox URI the
//! caller already knows, or run [`discover_inbox_uri`] against the target
//! resource. A missing web client is a configuration error and fails before
//! any request is issued.

use tracing::debug;

use crate::client::{HttpMethod, RequestOptions, WebClient, WebResource};
use crate::discovery::discover_inbox_uri;
use crate::errors::{LdnError, LdnResult};
use crate::vocab::media;

/// Options for [`list`].
#[derive(Debug)]
pub struct ListOptions<'a, C> {
    /// Client performing the requests. Required; `list` fails with
    /// [`LdnError::MissingWebClient`] when absent.
    pub web_client: Option<&'a C>,
    /// Known inbox URI. When set, discovery is skipped entirely.
    pub inbox_uri: Option<String>,
}

impl<'a, C> ListOptions<'a, C> {
    /// Options with the given client and discovery left to run.
    #[must_use]
    pub fn new(web_client: &'a C) -> Self {
        Self {
            web_client: Some(web_client),
            inbox_uri: None,
        }
    }

    /// Supply an already-known inbox URI, skipping discovery.
    #[must_use]
    pub fn inbox_uri(mut self, uri: impl Into<String>) -> Self {
        self.inbox_uri = Some(uri.into());
        self
    }
}

impl<C> Default for ListOptions<'_, C> {
    fn default() -> Self {
        Self {
            web_client: None,
            inbox_uri: None,
        }
    }
}

/// Options for [`send`].
#[derive(Debug)]
pub struct SendOptions<'a, C> {
    /// Client performing the requests. Required; `send` fails with
    /// [`LdnError::MissingWebClient`] when absent.
    pub web_client: Option<&'a C>,
    /// Known inbox URI. When set, discovery is skipped entirely.
    pub inbox_uri: Option<String>,
    /// `Content-Type` for the notification POST. Defaults to
    /// `application/ld+json`.
    pub content_type: Option<String>,
}

impl<'a, C> SendOptions<'a, C> {
    /// Options with the given client, discovery left to run, and the
    /// default content type.
    #[must_use]
    pub fn new(web_client: &'a C) -> Self {
        Self {
            web_client: Some(web_client),
            inbox_uri: None,
            content_type: None,
        }
    }

    /// Supply an already-known inbox URI, skipping discovery.
    #[must_use]
    pub fn inbox_uri(mut self, uri: impl Into<String>) -> Self {
        self.inbox_uri = Some(uri.into());
        self
    }

    /// Override the notification `Content-Type`.
    #[must_use]
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }
}

impl<C> Default for SendOptions<'_, C> {
    fn default() -> Self {
        Self {
            web_client: None,
            inbox_uri: None,
            content_type: None,
        }
    }
}

/// Resolve the inbox to operate on: the caller-supplied URI, or discovery
/// against the target resource.
async fn resolve_inbox_uri<C: WebClient>(
    resource_uri: &str,
    client: &C,
    known: Option<String>,
) -> LdnResult<String> {
    match known {
        Some(inbox) => {
            debug!(%resource_uri, %inbox, "inbox uri supplied, skipping discovery");
            Ok(inbox)
        }
        None => discover_inbox_uri(resource_uri, client, None).await,
    }
}

/// Enumerate the notification URIs stored in the inbox of `resource_uri`.
///
/// Issues the discovery GET only when `options.inbox_uri` is absent, then
/// one GET against the inbox itself. The returned member URIs mirror the
/// container's own representation and carry no ordering guarantee.
///
/// # Errors
///
/// - [`LdnError::MissingWebClient`] when `options.web_client` is `None`;
///   raised before any I/O.
/// - Discovery and transport failures, propagated unchanged.
pub async fn list<C: WebClient>(
    resource_uri: &str,
    options: ListOptions<'_, C>,
) -> LdnResult<Vec<String>> {
    let client = options.web_client.ok_or(LdnError::MissingWebClient)?;
    let inbox = resolve_inbox_uri(resource_uri, client, options.inbox_uri).await?;

    let container = client
        .fetch(&inbox, RequestOptions::accept(media::DISCOVERY_ACCEPT))
        .await?;
    let members = container.resources();
    debug!(%inbox, count = members.len(), "listed inbox members");
    Ok(members)
}

/// Deliver a notification `payload` to the inbox of `resource_uri`.
///
/// The payload is posted verbatim; its format is the caller's
/// responsibility and is only described by `options.content_type`
/// (`application/ld+json` when unset). Exactly one POST is issued, preceded
/// by at most one discovery GET.
///
/// Returns the server's response as produced by the client adapter. Status
/// codes are not interpreted here beyond what the adapter itself raises.
///
/// # Errors
///
/// - [`LdnError::MissingWebClient`] when `options.web_client` is `None`;
///   raised before any I/O.
/// - Discovery and transport failures, propagated unchanged.
pub async fn send<C: WebClient>(
    resource_uri: &str,
    payload: &str,
    options: SendOptions<'_, C>,
) -> LdnResult<C::Resource> {
    let client = options.web_client.ok_or(LdnError::MissingWebClient)?;
    let inbox = resolve_inbox_uri(resource_uri, client, options.inbox_uri).await?;

    let content_type = options
        .content_type
        .unwrap_or_else(|| media::JSON_LD.to_owned());
    debug!(%inbox, %content_type, "posting notification");
    client
        .request(
            &inbox,
            HttpMethod::Post,
            RequestOptions::content_type(&content_type),
            payload.to_owned(),
        )
        .await
}
