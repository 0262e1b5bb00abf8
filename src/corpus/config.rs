//! Corpus connection configuration

use serde::{Deserialize, Serialize};

/// Default graph endpoint host
pub const DEFAULT_HOST: &str = "localhost";

/// Default graph endpoint HTTP port
pub const DEFAULT_PORT: u16 = 7474;

/// Everything needed to reach one corpus on a graph server
///
/// Built fresh for every connection attempt and selection change and handed
/// around by value; nothing mutates a config after construction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Selected corpus, empty when only listing corpora
    pub corpus_name: String,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
}

impl std::fmt::Debug for CorpusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusConfig")
            .field("corpus_name", &self.corpus_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CorpusConfig {
    pub fn new(corpus_name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            corpus_name: corpus_name.into(),
            host: host.into(),
            port,
            user: None,
            password: None,
        }
    }

    /// Attach credentials, treating empty strings as absent
    pub fn with_credentials(mut self, user: Option<String>, password: Option<String>) -> Self {
        self.user = user.filter(|u| !u.is_empty());
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    pub fn has_corpus(&self) -> bool {
        !self.corpus_name.is_empty()
    }

    /// `host:port` with IPv6 literals bracketed
    pub fn authority(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Transactional Cypher endpoint of the graph server
    pub fn transaction_url(&self) -> String {
        format!("http://{}/db/data/transaction/commit", self.authority())
    }
}
