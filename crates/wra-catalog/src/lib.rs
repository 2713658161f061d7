//! # wra-catalog
//!
//! Turns the raw artifact list of a workflow run into a queryable catalog.
//!
//! ## Key components
//!
//! - [`RawArtifact`] — an artifact record as returned by the upstream API
//! - [`RunContext`] — the (owner, repo, check-suite id, head sha) of one run
//! - [`Artifact`] — a raw artifact enriched with its download URL and commit
//! - [`Catalog`] — the ordered list, the name index and the optional selection
//! - [`RenderContext`] — the read-only view of a catalog that templates see

pub mod artifact;
pub mod catalog;
pub mod error;

pub use artifact::{Artifact, RawArtifact, RunContext};
pub use catalog::{Catalog, RenderContext};
pub use error::{CatalogError, Result};
