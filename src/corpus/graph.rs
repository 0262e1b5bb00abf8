//! Graph database client over the transactional HTTP endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::{CorpusConfig, CorpusError, CorpusService, Hierarchy};

const TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

const LIST_CORPORA: &str = "MATCH (n:Corpus) RETURN n.name AS name";

/// HTTP client for a graph server holding speech corpora
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("http", &"<HttpClient>")
            .finish()
    }
}

impl Default for GraphClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphClient {
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to configure HTTP client, using defaults: {}", e);
                Client::new()
            });
        Self { http }
    }

    /// Run one Cypher statement and return its rows
    pub async fn run(
        &self,
        config: &CorpusConfig,
        statement: &str,
        parameters: Value,
    ) -> Result<Vec<Vec<Value>>, CorpusError> {
        resolve(config).await?;

        let address = config.authority();
        debug!("Cypher on {}: {}", address, statement);

        let body = json!({
            "statements": [{ "statement": statement, "parameters": parameters }]
        });
        let mut request = self
            .http
            .post(config.transaction_url())
            .header(header::ACCEPT, "application/json; charset=UTF-8")
            .json(&body);
        if let Some(user) = &config.user {
            request = request.basic_auth(user, config.password.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_transport(&address, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CorpusError::Authorization {
                address,
                reason: status.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CorpusError::Response(format!(
                "HTTP {} from {}",
                status, address
            )));
        }

        let parsed: TransactionResponse = response
            .json()
            .await
            .map_err(|e| CorpusError::Response(e.to_string()))?;
        parsed.into_rows(&address)
    }
}

#[async_trait]
impl CorpusService for GraphClient {
    async fn list_corpora(&self, config: &CorpusConfig) -> Result<Vec<String>, CorpusError> {
        let rows = self.run(config, LIST_CORPORA, json!({})).await?;
        Ok(string_column(rows))
    }

    async fn generate_hierarchy(&self, config: &CorpusConfig) -> Result<Hierarchy, CorpusError> {
        if !config.has_corpus() {
            return Err(CorpusError::NoCorpus);
        }
        let statement = hierarchy_statement(&config.corpus_name);
        let rows = self
            .run(config, &statement, json!({ "corpus": config.corpus_name }))
            .await?;

        let pairs = rows.into_iter().filter_map(|row| {
            let mut cells = row.into_iter();
            let child = cells.next()?.as_str()?.to_string();
            let parent = cells.next().and_then(|v| v.as_str().map(str::to_string));
            Some((child, parent))
        });
        Ok(Hierarchy::from_pairs(pairs))
    }

    async fn discourses(&self, config: &CorpusConfig) -> Result<Vec<String>, CorpusError> {
        if !config.has_corpus() {
            return Err(CorpusError::NoCorpus);
        }
        let statement = format!(
            "MATCH (d:Discourse:{}) RETURN d.name AS name",
            quote_label(&config.corpus_name)
        );
        let rows = self.run(config, &statement, json!({})).await?;
        Ok(string_column(rows))
    }
}

/// Fail early, and distinctly, when the host name does not resolve
async fn resolve(config: &CorpusConfig) -> Result<(), CorpusError> {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');
    match tokio::net::lookup_host((host, config.port)).await {
        Ok(mut addrs) => {
            if addrs.next().is_some() {
                Ok(())
            } else {
                Err(CorpusError::NetworkAddress {
                    host: config.host.clone(),
                    reason: "no addresses found".to_string(),
                })
            }
        }
        Err(e) => Err(CorpusError::NetworkAddress {
            host: config.host.clone(),
            reason: e.to_string(),
        }),
    }
}

fn classify_transport(address: &str, e: reqwest::Error) -> CorpusError {
    if e.is_connect() || e.is_timeout() {
        CorpusError::Connection {
            address: address.to_string(),
            reason: e.to_string(),
        }
    } else {
        CorpusError::Response(e.to_string())
    }
}

/// Backtick-quote a label so corpus names may contain any character
fn quote_label(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Containment pairs between annotation nodes of one corpus
///
/// Root types come back with a null parent.
fn hierarchy_statement(corpus: &str) -> String {
    let label = quote_label(corpus);
    format!(
        "MATCH (c:speech:{label}) \
         OPTIONAL MATCH (c)-[:contained_by]->(p:speech:{label}) \
         WITH [l IN labels(c) WHERE l <> $corpus AND l <> 'speech'] AS own, \
              [l IN labels(p) WHERE l <> $corpus AND l <> 'speech'] AS up \
         RETURN DISTINCT own[0] AS type, up[0] AS parent"
    )
}

fn string_column(rows: Vec<Vec<Value>>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| match row.into_iter().next() {
            Some(Value::String(s)) => Some(s),
            other => {
                warn!("Skipping non-string value in name column: {:?}", other);
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct TransactionResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    #[serde(default)]
    errors: Vec<StatementError>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    data: Vec<ResultRow>,
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    row: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct StatementError {
    code: String,
    #[serde(default)]
    message: String,
}

impl TransactionResponse {
    fn into_rows(self, address: &str) -> Result<Vec<Vec<Value>>, CorpusError> {
        if let Some(error) = self.errors.into_iter().next() {
            if error.code.starts_with("Neo.ClientError.Security") {
                return Err(CorpusError::Authorization {
                    address: address.to_string(),
                    reason: error.message,
                });
            }
            return Err(CorpusError::Query {
                code: error.code,
                message: error.message,
            });
        }

        let result = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CorpusError::Response("no statement result".to_string()))?;
        Ok(result.data.into_iter().map(|r| r.row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral port
    async fn serve_once(status_line: &'static str, body: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        port
    }

    #[test]
    fn quotes_backticks_in_labels() {
        assert_eq!(quote_label("buckeye"), "`buckeye`");
        assert_eq!(quote_label("we`ird"), "`we``ird`");
    }

    #[test]
    fn security_errors_are_authorization() {
        let parsed: TransactionResponse = serde_json::from_str(
            r#"{"results":[],"errors":[{"code":"Neo.ClientError.Security.Unauthorized","message":"No auth"}]}"#,
        )
        .unwrap();
        let err = parsed.into_rows("localhost:7474").unwrap_err();
        assert!(matches!(err, CorpusError::Authorization { .. }));
    }

    #[test]
    fn statement_errors_are_queries() {
        let parsed: TransactionResponse = serde_json::from_str(
            r#"{"results":[],"errors":[{"code":"Neo.ClientError.Statement.SyntaxError","message":"bad"}]}"#,
        )
        .unwrap();
        let err = parsed.into_rows("localhost:7474").unwrap_err();
        assert_eq!(
            err,
            CorpusError::Query {
                code: "Neo.ClientError.Statement.SyntaxError".into(),
                message: "bad".into()
            }
        );
    }

    #[tokio::test]
    async fn lists_corpora_in_server_order() {
        let port = serve_once(
            "200 OK",
            r#"{"results":[{"columns":["name"],"data":[{"row":["timit"]},{"row":["buckeye"]},{"row":[null]}]}],"errors":[]}"#,
        )
        .await;
        let config = CorpusConfig::new("", "127.0.0.1", port);
        let names = GraphClient::new().list_corpora(&config).await.unwrap();
        assert_eq!(names, vec!["timit".to_string(), "buckeye".to_string()]);
    }

    #[tokio::test]
    async fn unauthorized_status_maps_to_authorization() {
        let port = serve_once("401 Unauthorized", "{}").await;
        let config = CorpusConfig::new("", "127.0.0.1", port)
            .with_credentials(Some("neo4j".into()), Some("wrong".into()));
        let err = GraphClient::new().list_corpora(&config).await.unwrap_err();
        assert!(matches!(err, CorpusError::Authorization { .. }));
    }

    #[tokio::test]
    async fn hierarchy_rows_become_pairs() {
        let port = serve_once(
            "200 OK",
            r#"{"results":[{"columns":["type","parent"],"data":[{"row":["phone","word"]},{"row":["word",null]}]}],"errors":[]}"#,
        )
        .await;
        let config = CorpusConfig::new("timit", "127.0.0.1", port);
        let hierarchy = GraphClient::new().generate_hierarchy(&config).await.unwrap();
        assert_eq!(hierarchy.parent_of("phone"), Some("word"));
        assert_eq!(hierarchy.highest_to_lowest(), vec!["word", "phone"]);
    }

    #[tokio::test]
    async fn refused_connection_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = CorpusConfig::new("", "127.0.0.1", port);
        let err = GraphClient::new().list_corpora(&config).await.unwrap_err();
        assert!(err.is_connection_failure(), "got {:?}", err);
        assert!(matches!(err, CorpusError::Connection { .. }));
    }

    #[tokio::test]
    async fn literal_addresses_resolve() {
        assert_eq!(resolve(&CorpusConfig::new("", "127.0.0.1", 7474)).await, Ok(()));
        assert_eq!(resolve(&CorpusConfig::new("", "[::1]", 7474)).await, Ok(()));
    }

    #[tokio::test]
    async fn discourses_need_a_corpus() {
        let config = CorpusConfig::new("", "127.0.0.1", 7474);
        let err = GraphClient::new().discourses(&config).await.unwrap_err();
        assert_eq!(err, CorpusError::NoCorpus);
    }
}
