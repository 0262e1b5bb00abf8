//! Corpus access errors

use thiserror::Error;

/// Failure talking to a corpus server or its local cache
///
/// `Clone` so results can ride inside UI messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Server refused the connection or did not answer in time
    #[error("Could not connect to {address}: {reason}")]
    Connection { address: String, reason: String },

    /// Credentials rejected
    #[error("Authorization failed for {address}: {reason}")]
    Authorization { address: String, reason: String },

    /// Host name could not be resolved to an address
    #[error("Could not resolve network address '{host}': {reason}")]
    NetworkAddress { host: String, reason: String },

    /// Server accepted the request but the statement failed
    #[error("Graph query failed ({code}): {message}")]
    Query { code: String, message: String },

    /// Response could not be understood
    #[error("Unexpected server response: {0}")]
    Response(String),

    /// Operation needs a corpus but the config names none
    #[error("No corpus selected")]
    NoCorpus,

    /// Local variable cache could not be read or written
    #[error("Local cache error: {0}")]
    Cache(String),

    /// Background task ended without reporting back
    #[error("Background task failed: {0}")]
    Task(String),
}

impl CorpusError {
    /// Failures that mean "could not reach or log in to the server"
    ///
    /// These clear the active configuration downstream.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            CorpusError::Connection { .. }
                | CorpusError::Authorization { .. }
                | CorpusError::NetworkAddress { .. }
        )
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Cache(e.to_string())
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        CorpusError::Cache(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failure_kinds() {
        let refused = CorpusError::Connection {
            address: "localhost:7474".into(),
            reason: "refused".into(),
        };
        let denied = CorpusError::Authorization {
            address: "localhost:7474".into(),
            reason: "bad password".into(),
        };
        let unresolved = CorpusError::NetworkAddress {
            host: "nowhere.invalid".into(),
            reason: "no such host".into(),
        };
        assert!(refused.is_connection_failure());
        assert!(denied.is_connection_failure());
        assert!(unresolved.is_connection_failure());

        assert!(!CorpusError::Response("truncated".into()).is_connection_failure());
        assert!(!CorpusError::NoCorpus.is_connection_failure());
    }

    #[test]
    fn messages_name_the_target() {
        let err = CorpusError::NetworkAddress {
            host: "nowhere.invalid".into(),
            reason: "no such host".into(),
        };
        assert_eq!(
            err.to_string(),
            "Could not resolve network address 'nowhere.invalid': no such host"
        );
    }
}
