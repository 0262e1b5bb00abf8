//! Speech corpus database access
//!
//! Connection configuration, the graph endpoint client, per-corpus sessions
//! and the local variable cache those sessions persist into.

mod config;
mod context;
mod error;
mod graph;
mod hierarchy;
mod service;
mod variables;

pub use config::{CorpusConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use context::{CorpusContext, refresh_hierarchy, reset_hierarchy};
pub use error::CorpusError;
pub use graph::GraphClient;
pub use hierarchy::Hierarchy;
pub use service::CorpusService;
pub use variables::{CorpusVariables, VariableStore};

#[cfg(test)]
pub(crate) use context::testing;
