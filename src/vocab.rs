// ABOUTME: Wire-level vocabulary constants for LDN discovery and delivery
// ABOUTME: LDP IRIs plus the media types used in content negotiation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LDN Client Contributors

//! Constants module
//!
//! IRIs and media types are grouped by vocabulary rather than kept in a
//! single flat list, so callers can import only the namespace they need.

/// Linked Data Platform vocabulary constants
pub mod ldp {
    /// ldp:inbox IRI, used both as a `Link` header relation type and as an
    /// RDF predicate in resource bodies
    pub const INBOX: &str = "http://www.w3.org/ns/ldp#inbox";

    /// ldp:contains IRI, the containment predicate behind an inbox
    /// container's member listing
    pub const CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
}

/// Media types used for content negotiation and notification delivery
pub mod media {
    /// Default notification `Content-Type`
    pub const JSON_LD: &str = "application/ld+json";

    /// Turtle media type
    pub const TURTLE: &str = "text/turtle";

    /// `Accept` value sent on every discovery and listing GET: prefer
    /// JSON-LD, fall back to Turtle
    pub const DISCOVERY_ACCEPT: &str = "application/ld+json;q=0.9,text/turtle;q=0.8";
}
