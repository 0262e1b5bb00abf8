//! Corpus server operations used by the client

use async_trait::async_trait;

use super::{CorpusConfig, CorpusError, Hierarchy};

/// Remote operations against a corpus server
///
/// The UI only ever talks to a server through this trait, so connection
/// logic can be exercised without a running database.
#[async_trait]
pub trait CorpusService: Send + Sync {
    /// Names of all corpora on the server, in server order
    async fn list_corpora(&self, config: &CorpusConfig) -> Result<Vec<String>, CorpusError>;

    /// Infer the annotation type hierarchy of `config.corpus_name`
    async fn generate_hierarchy(&self, config: &CorpusConfig) -> Result<Hierarchy, CorpusError>;

    /// Names of the discourses (recordings) in `config.corpus_name`
    async fn discourses(&self, config: &CorpusConfig) -> Result<Vec<String>, CorpusError>;
}
