//! Audio availability check

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::corpus::{CorpusConfig, CorpusContext, CorpusError, CorpusService, VariableStore};

/// Whether every discourse of the corpus has a cached, existing audio file
pub async fn check_audio(
    service: Arc<dyn CorpusService>,
    store: VariableStore,
    config: CorpusConfig,
) -> Result<bool, CorpusError> {
    let context = CorpusContext::open(config, service, store)?;
    let discourses = context.discourses().await?;
    let audio_files = &context.variables().audio_files;

    let missing = discourses
        .iter()
        .filter(|d| !audio_files.get(*d).is_some_and(|p| p.is_file()))
        .count();
    tracing::debug!(
        "Audio check for '{}': {} of {} discourses missing audio",
        context.config().corpus_name,
        missing,
        discourses.len()
    );
    Ok(!discourses.is_empty() && missing == 0)
}

/// Completion of a launched audio check
#[derive(Debug)]
pub struct CheckHandle {
    rx: oneshot::Receiver<Result<bool, CorpusError>>,
}

impl CheckHandle {
    /// Resolves once, when the check reports
    pub async fn finished(self) -> Result<bool, CorpusError> {
        self.rx
            .await
            .unwrap_or_else(|_| Err(CorpusError::Task("audio check stopped".to_string())))
    }
}

/// Launches audio availability checks
#[derive(Clone)]
pub struct AudioChecker {
    service: Arc<dyn CorpusService>,
    store: VariableStore,
}

impl AudioChecker {
    pub fn new(service: Arc<dyn CorpusService>, store: VariableStore) -> Self {
        Self { service, store }
    }

    pub fn start(&self, config: CorpusConfig) -> CheckHandle {
        let (tx, rx) = oneshot::channel();
        let service = self.service.clone();
        let store = self.store.clone();

        tokio::spawn(async move {
            let result = check_audio(service, store, config).await;
            if let Err(e) = &result {
                tracing::warn!("Audio check failed: {}", e);
            }
            let _ = tx.send(result);
        });

        CheckHandle { rx }
    }
}
