//! Storefront API access for the storefront frontend.
//!
//! # Purpose
//!
//! * Composes the GraphQL documents the storefront needs (predictive search,
//!   regular search, collection listing, facet filters).
//! * Decodes Storefront API payloads into typed models.
//! * Exposes the [`SearchProvider`] seam consumed by predictive search sessions.
//! * Hosts small catalog helpers derived from payloads: facet options,
//!   pagination variables, variant and menu links, sitewide banner decoding.
//!
//! # Mental model
//!
//! * [`StorefrontClient`] is a cheap-to-clone handle around one HTTP client and
//!   one endpoint. Each operation is a single `POST` of `{query, variables}`.
//! * Every operation splits into a network half (`StorefrontClient` methods)
//!   and a pure decode half (`from_response` style functions) so payload rules
//!   are testable without a store.
//!
//! # Failure modes
//!
//! * Transport failures map to [`StorefrontError::Network`] or
//!   [`StorefrontError::Status`].
//! * GraphQL `errors` are fatal for predictive search and collections, and
//!   reported inline for regular search.
//! * Missing `data` maps to [`StorefrontError::MissingData`].

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod facets;
pub mod links;
pub mod metaobject;
pub mod model;
pub mod pagination;
pub mod params;
pub mod predictive;
pub mod queries;
pub mod search;

pub use client::{GraphQlError, GraphQlResponse, StorefrontClient};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use model::{PredictiveItems, PredictiveResult};
pub use params::QueryParams;
pub use predictive::{DEFAULT_PREDICTIVE_LIMIT, PredictiveRequest, SearchProvider};
