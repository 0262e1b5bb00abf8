//! Session over a single corpus
//!
//! A `CorpusContext` pairs a config with the server and the local variable
//! cache. Opening loads the cached variables; dropping the context releases
//! it. Changes only reach disk through `save_variables`, which merges them
//! into whatever the file holds at that moment.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use super::{CorpusConfig, CorpusError, CorpusService, CorpusVariables, Hierarchy, VariableStore};

/// Annotation type dropped from the hierarchy when the local cache is reset
pub const SYLLABIC: &str = "syllabic";

pub struct CorpusContext {
    config: CorpusConfig,
    service: Arc<dyn CorpusService>,
    store: VariableStore,
    variables: CorpusVariables,
    new_hierarchy: Option<Hierarchy>,
    new_audio_files: BTreeMap<String, PathBuf>,
}

impl CorpusContext {
    pub fn open(
        config: CorpusConfig,
        service: Arc<dyn CorpusService>,
        store: VariableStore,
    ) -> Result<Self, CorpusError> {
        if !config.has_corpus() {
            return Err(CorpusError::NoCorpus);
        }
        let variables = store.load(&config.corpus_name)?;
        debug!("Opened corpus context for '{}'", config.corpus_name);
        Ok(Self {
            config,
            service,
            store,
            variables,
            new_hierarchy: None,
            new_audio_files: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    pub fn set_hierarchy(&mut self, hierarchy: Hierarchy) {
        self.variables.hierarchy = Some(hierarchy.clone());
        self.new_hierarchy = Some(hierarchy);
    }

    /// Record located audio; existing entries for other discourses are kept
    pub fn add_audio_files(&mut self, files: BTreeMap<String, PathBuf>) {
        self.variables.audio_files.extend(files.clone());
        self.new_audio_files.extend(files);
    }

    pub fn variables(&self) -> &CorpusVariables {
        &self.variables
    }

    /// Ask the server for the current annotation hierarchy
    pub async fn generate_hierarchy(&self) -> Result<Hierarchy, CorpusError> {
        self.service.generate_hierarchy(&self.config).await
    }

    pub async fn discourses(&self) -> Result<Vec<String>, CorpusError> {
        self.service.discourses(&self.config).await
    }

    /// Write this session's changes to the local cache
    pub fn save_variables(&mut self) -> Result<(), CorpusError> {
        let hierarchy = self.new_hierarchy.take();
        let audio_files = std::mem::take(&mut self.new_audio_files);
        self.variables = self.store.update(&self.config.corpus_name, |variables| {
            if let Some(hierarchy) = hierarchy {
                variables.hierarchy = Some(hierarchy);
            }
            variables.audio_files.extend(audio_files);
        })?;
        Ok(())
    }
}

impl Drop for CorpusContext {
    fn drop(&mut self) {
        debug!("Closed corpus context for '{}'", self.config.corpus_name);
    }
}

/// Regenerate the hierarchy and cache it
pub async fn refresh_hierarchy(
    service: Arc<dyn CorpusService>,
    store: VariableStore,
    config: CorpusConfig,
) -> Result<Hierarchy, CorpusError> {
    let mut context = CorpusContext::open(config, service, store)?;
    let hierarchy = context.generate_hierarchy().await?;
    context.set_hierarchy(hierarchy.clone());
    context.save_variables()?;
    info!(
        "Cached hierarchy for '{}': {}",
        context.config().corpus_name,
        hierarchy.highest_to_lowest().join(" > ")
    );
    Ok(hierarchy)
}

/// Regenerate the hierarchy without the syllabic type and cache it
pub async fn reset_hierarchy(
    service: Arc<dyn CorpusService>,
    store: VariableStore,
    config: CorpusConfig,
) -> Result<Hierarchy, CorpusError> {
    let mut context = CorpusContext::open(config, service, store)?;
    let mut hierarchy = context.generate_hierarchy().await?;
    if !hierarchy.remove_annotation_type(SYLLABIC) {
        debug!("No '{}' annotation type to remove", SYLLABIC);
    }
    context.set_hierarchy(hierarchy.clone());
    context.save_variables()?;
    info!("Reset local cache for '{}'", context.config().corpus_name);
    Ok(hierarchy)
}
