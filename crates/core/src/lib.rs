//! Storefront Relay Core - Shared types library.
//!
//! This crate provides the types shared by the two halves of the system:
//! - `relay` - Server-side forwarder that hides the Storefront access token
//! - `catalog` - Client that queries the relay and renders the catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog snapshot types (collections, products, variants) and price display
//! - [`graphql`] - GraphQL request body and error envelope shared over the relay

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod graphql;
pub mod types;

pub use graphql::{GraphQLError, GraphQLErrorLocation, GraphQLRequest};
pub use types::*;
