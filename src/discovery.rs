// ABOUTME: Inbox discovery for LDN target resources
// ABOUTME: Link header lookup with RDF body-triple fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

//! Inbox discovery.
//!
//! Discovery is a two-strategy fallback chain: the `Link` response headers
//! are checked first, and only when they hold no `ldp:inbox` relation is the
//! body parsed and searched for an inbox triple. A resource advertising its
//! inbox in a header therefore never pays for a body parse.

use tracing::debug;

use crate::client::{Graph, RequestOptions, WebClient, WebResource};
use crate::errors::{LdnError, LdnResult};
use crate::vocab::{ldp, media};

/// Resolve the LDN inbox URI for the resource at `uri`.
///
/// When `resource` is supplied the network is never touched: the caller's
/// pre-fetched response is inspected directly. Otherwise a single GET is
/// issued with `Accept: application/ld+json;q=0.9,text/turtle;q=0.8`.
///
/// When several `ldp:inbox` triples exist in the body, the first one the
/// graph implementation yields wins; see [`Graph::matches`] for why that
/// choice is non-deterministic.
///
/// # Errors
///
/// - [`LdnError::NoInboxFound`] when neither a `Link` header nor a body
///   triple declares an inbox.
/// - Transport and parse failures from the injected client, propagated
///   unchanged.
pub async fn discover_inbox_uri<C: WebClient>(
    uri: &str,
    client: &C,
    resource: Option<&C::Resource>,
) -> LdnResult<String> {
    let fetched;
    let resource = match resource {
        Some(supplied) => supplied,
        None => {
            fetched = client
                .fetch(uri, RequestOptions::accept(media::DISCOVERY_ACCEPT))
                .await?;
            &fetched
        }
    };

    if let Some(inbox) = resource.link_headers().get(ldp::INBOX) {
        debug!(%uri, %inbox, "inbox found in Link header");
        return Ok(inbox.clone());
    }

    debug!(%uri, "no inbox Link relation, searching body triples");
    let graph = resource.parsed_graph()?;
    let inbox = graph
        .matches(None, ldp::INBOX, None)
        .into_iter()
        .next()
        .map(|triple| triple.object);

    match inbox {
        Some(inbox) => {
            debug!(%uri, %inbox, "inbox found in body triple");
            Ok(inbox)
        }
        None => Err(LdnError::no_inbox_found(uri)),
    }
}
