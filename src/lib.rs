//! Concept resolver: client for the concept search service.
//!
//! Upstream services that hold concept identifiers use this crate to fetch
//! the full concept records, deduplicated across sources (concordances).
//! They should depend on the [`ConceptSearch`] trait; [`ConceptResolver`] is
//! the HTTP implementation.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use concept_resolver::{new_transaction_id, ConceptResolver, ResolverConfig};
//!
//! let resolver = ConceptResolver::from_config(&ResolverConfig::from_env()?)?;
//! let concepts = resolver
//!     .resolve(&new_transaction_id(), &["6a2a0170-6afa-4bcc-b427-430268d2ac50"])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod transport;
pub mod types;

use async_trait::async_trait;

pub use config::ResolverConfig;
pub use error::{ConceptSearchError, ErrorKind};
pub use resolver::{
    ConceptResolver, CLIENT_USER_AGENT, CONCEPT_SEARCH_QUERY_PARAM, REQUEST_ID_HEADER,
};
pub use transport::{HttpTransport, TransportResponse};
pub use types::Concept;

pub type Result<T> = std::result::Result<T, ConceptSearchError>;

#[async_trait]
pub trait ConceptSearch: Send + Sync {
    /// Look up concepts for `identifiers`, tagging the call with `correlation_id`.
    async fn by_ids(&self, correlation_id: &str, identifiers: &[String]) -> Result<Vec<Concept>>;
}

/// Fresh correlation token of the form `tid_<uuid>`.
pub fn new_transaction_id() -> String {
    format!("tid_{}", uuid::Uuid::new_v4())
}
