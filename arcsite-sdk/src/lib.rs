//! Shared types for the arcsite content service.
//!
//! The document tree, the section catalogue, editor paths and the wire
//! objects of the public and admin APIs live here so that the server and
//! any client agree on one definition.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(unsafe_code)]

pub mod config;
pub mod document;
pub mod edit;
pub mod objects;
pub mod section;
pub mod signature;

#[cfg(feature = "client")]
pub mod client;

pub use document::{PartialDocument, SiteDocument};
pub use edit::{EditOp, FieldPath, ListPath, PathParseError};
pub use section::Section;
