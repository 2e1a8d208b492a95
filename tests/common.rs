// ABOUTME: Shared test utilities for ldn-client integration tests
// ABOUTME: Recording mock WebClient, canned resources, and test logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors
#![allow(dead_code)]

//! Shared test doubles for `ldn-client`.
//!
//! `MockWebClient` records every request it serves so tests can assert on
//! exactly which network calls an operation issued; `MockResource` counts
//! `parsed_graph` invocations so tests can prove the header path never
//! touches the body.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use ldn_client::{
    Graph, HttpMethod, LdnError, LdnResult, RequestOptions, Triple, WebClient, WebResource,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// One request served by the mock client.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MockGraph {
    triples: Vec<Triple>,
}

impl Graph for MockGraph {
    fn matches(&self, subject: Option<&str>, predicate: &str, object: Option<&str>) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|t| {
                t.predicate == predicate
                    && subject.is_none_or(|s| t.subject == s)
                    && object.is_none_or(|o| t.object == o)
            })
            .cloned()
            .collect()
    }
}

/// Canned response with recordable graph-parse behavior.
#[derive(Debug, Clone)]
pub struct MockResource {
    uri: String,
    link_headers: HashMap<String, String>,
    triples: Vec<Triple>,
    members: Vec<String>,
    parse_error: Option<String>,
    parse_calls: Arc<AtomicUsize>,
}

impl MockResource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            link_headers: HashMap::new(),
            triples: Vec::new(),
            members: Vec::new(),
            parse_error: None,
            parse_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_link(mut self, rel: &str, target: &str) -> Self {
        self.link_headers.insert(rel.to_owned(), target.to_owned());
        self
    }

    pub fn with_triple(mut self, subject: &str, predicate: &str, object: &str) -> Self {
        self.triples.push(Triple {
            subject: subject.to_owned(),
            predicate: predicate.to_owned(),
            object: object.to_owned(),
        });
        self
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| (*m).to_owned()).collect();
        self
    }

    pub fn with_parse_error(mut self, message: &str) -> Self {
        self.parse_error = Some(message.to_owned());
        self
    }

    /// Handle for asserting how many times the body was parsed, valid across
    /// the clones the mock client hands out.
    pub fn parse_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.parse_calls)
    }
}

impl WebResource for MockResource {
    type Graph = MockGraph;

    fn link_headers(&self) -> &HashMap<String, String> {
        &self.link_headers
    }

    fn parsed_graph(&self) -> LdnResult<MockGraph> {
        self.parse_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.parse_error {
            return Err(LdnError::parse(
                self.uri.clone(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, message.clone()),
            ));
        }
        Ok(MockGraph {
            triples: self.triples.clone(),
        })
    }

    fn resources(&self) -> Vec<String> {
        self.members.clone()
    }
}

/// Recording mock client serving canned resources by URI.
#[derive(Debug, Default)]
pub struct MockWebClient {
    responses: HashMap<String, MockResource>,
    transport_failures: HashMap<String, String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockWebClient {
    pub fn new() -> Self {
        init_test_logging();
        Self::default()
    }

    pub fn with_resource(mut self, resource: MockResource) -> Self {
        self.responses.insert(resource.uri.clone(), resource);
        self
    }

    pub fn with_transport_failure(mut self, uri: &str, message: &str) -> Self {
        self.transport_failures
            .insert(uri.to_owned(), message.to_owned());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record(&self, method: &str, uri: &str, options: &RequestOptions, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_owned(),
            uri: uri.to_owned(),
            headers: options.headers.clone(),
            body,
        });
    }

    fn respond(&self, uri: &str) -> LdnResult<MockResource> {
        if let Some(message) = self.transport_failures.get(uri) {
            return Err(LdnError::transport(
                uri,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.clone()),
            ));
        }
        self.responses.get(uri).cloned().ok_or_else(|| {
            LdnError::transport(
                uri,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no canned response"),
            )
        })
    }
}

#[async_trait]
impl WebClient for MockWebClient {
    type Resource = MockResource;

    async fn fetch(&self, uri: &str, options: RequestOptions) -> LdnResult<MockResource> {
        self.record("GET", uri, &options, None);
        self.respond(uri)
    }

    async fn request(
        &self,
        uri: &str,
        method: HttpMethod,
        options: RequestOptions,
        body: String,
    ) -> LdnResult<MockResource> {
        self.record(method.as_str(), uri, &options, Some(body));
        self.respond(uri)
    }
}
