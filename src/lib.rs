// ABOUTME: Library entry point for the LDN client crate
// ABOUTME: Inbox discovery, listing, and notification delivery over an injected client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

#![deny(unsafe_code)]

//! # ldn-client
//!
//! Client-side discovery and delivery for the W3C [Linked Data
//! Notifications](https://www.w3.org/TR/ldn/) protocol: given a resource
//! URI, find its `ldp:inbox`, enumerate the notifications it holds, and POST
//! new notifications into it.
//!
//! ## Operations
//!
//! - [`discover_inbox_uri`]: resolve a resource's inbox from its `Link`
//!   headers, falling back to an `ldp:inbox` triple in the body.
//! - [`list`]: enumerate the notification URIs stored in an inbox.
//! - [`send`]: deliver a serialized notification payload to an inbox.
//!
//! All three run against an injected [`WebClient`]; this crate performs no
//! HTTP and parses no RDF itself. Adapters implement [`WebClient`],
//! [`WebResource`], and [`Graph`] for their HTTP/RDF library of choice.
//!
//! Retry policy, caching, timeouts, and authentication are deliberately
//! absent: configure them on the adapter.
//!
//! ## Example
//!
//! A minimal adapter whose resources advertise their inbox via a `Link`
//! header:
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//!
//! use async_trait::async_trait;
//! use ldn_client::{
//!     discover_inbox_uri, vocab, Graph, HttpMethod, LdnResult, RequestOptions, SendOptions,
//!     Triple, WebClient, WebResource,
//! };
//!
//! struct StaticGraph(Vec<Triple>);
//!
//! impl Graph for StaticGraph {
//!     fn matches(&self, s: Option<&str>, p: &str, o: Option<&str>) -> Vec<Triple> {
//!         self.0
//!             .iter()
//!             .filter(|t| {
//!                 t.predicate == p
//!                     && s.is_none_or(|s| t.subject == s)
//!                     && o.is_none_or(|o| t.object == o)
//!             })
//!             .cloned()
//!             .collect()
//!     }
//! }
//!
//! struct StaticResource {
//!     links: HashMap<String, String>,
//! }
//!
//! impl WebResource for StaticResource {
//!     type Graph = StaticGraph;
//!
//!     fn link_headers(&self) -> &HashMap<String, String> {
//!         &self.links
//!     }
//!
//!     fn parsed_graph(&self) -> LdnResult<StaticGraph> {
//!         Ok(StaticGraph(Vec::new()))
//!     }
//!
//!     fn resources(&self) -> Vec<String> {
//!         Vec::new()
//!     }
//! }
//!
//! struct StaticClient;
//!
//! #[async_trait]
//! impl WebClient for StaticClient {
//!     type Resource = StaticResource;
//!
//!     async fn fetch(&self, _uri: &str, _options: RequestOptions) -> LdnResult<StaticResource> {
//!         let links = HashMap::from([(
//!             vocab::ldp::INBOX.to_owned(),
//!             "https://example.org/inbox".to_owned(),
//!         )]);
//!         Ok(StaticResource { links })
//!     }
//!
//!     async fn request(
//!         &self,
//!         uri: &str,
//!         _method: HttpMethod,
//!         _options: RequestOptions,
//!         _body: String,
//!     ) -> LdnResult<StaticResource> {
//!         self.fetch(uri, RequestOptions::new()).await
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> LdnResult<()> {
//!     let client = StaticClient;
//!     let inbox = discover_inbox_uri("https://example.org/doc", &client, None).await?;
//!     println!("inbox: {inbox}");
//!
//!     ldn_client::send(
//!         "https://example.org/doc",
//!         r#"{"@context": "https://www.w3.org/ns/activitystreams", "summary": "hi"}"#,
//!         SendOptions::new(&client).inbox_uri(inbox),
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod discovery;
pub mod errors;
pub mod inbox;
pub mod vocab;

pub use client::{Graph, HttpMethod, RequestOptions, Triple, WebClient, WebResource};
pub use discovery::discover_inbox_uri;
pub use errors::{BoxError, LdnError, LdnResult};
pub use inbox::{list, send, ListOptions, SendOptions};
