//! A client for the Azure DevOps code search API.
//!
//! The entry point is [`HttpCodeSearchClient`], which implements the [`CodeSearch`]
//! trait by paginating through the search endpoint and returning the aggregated
//! list of matching files. Authorization headers are supplied by a pluggable
//! [`RequestOptionsProvider`], with [`PatRequestOptionsProvider`] covering the
//! personal access token case.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
