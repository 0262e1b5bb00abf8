//! Per-corpus variables cached on local disk
//!
//! Each corpus gets its own directory under the cache root holding a
//! `variables.json` with the derived hierarchy and located audio files.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::{CorpusError, Hierarchy};

const VARIABLES_FILE: &str = "variables.json";

/// Locally cached state for one corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusVariables {
    #[serde(default)]
    pub hierarchy: Option<Hierarchy>,
    /// Discourse name -> audio file on this machine
    #[serde(default)]
    pub audio_files: BTreeMap<String, PathBuf>,
}

/// Directory of cached corpus variables
///
/// Clones share one write lock, so concurrent sessions never overwrite
/// each other's updates.
#[derive(Debug, Clone)]
pub struct VariableStore {
    root: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl VariableStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Store under the platform cache directory
    pub fn default_location() -> Self {
        let root = directories::ProjectDirs::from("org", "mlml", "speechtools")
            .map(|dirs| dirs.cache_dir().join("corpora"))
            .unwrap_or_else(|| PathBuf::from("cache").join("corpora"));
        Self::new(root)
    }

    pub fn corpus_dir(&self, corpus_name: &str) -> PathBuf {
        self.root.join(sanitize_dir_name(corpus_name))
    }

    /// Load variables, returning defaults when nothing is cached yet
    pub fn load(&self, corpus_name: &str) -> Result<CorpusVariables, CorpusError> {
        let path = self.corpus_dir(corpus_name).join(VARIABLES_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CorpusVariables::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, corpus_name: &str, variables: &CorpusVariables) -> Result<(), CorpusError> {
        let dir = self.corpus_dir(corpus_name);
        std::fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(variables)?;
        std::fs::write(dir.join(VARIABLES_FILE), content)?;
        tracing::debug!("Saved variables for '{}' to {}", corpus_name, dir.display());
        Ok(())
    }

    /// Apply `change` to the variables currently on disk and save them
    pub fn update(
        &self,
        corpus_name: &str,
        change: impl FnOnce(&mut CorpusVariables),
    ) -> Result<CorpusVariables, CorpusError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut variables = self.load(corpus_name)?;
        change(&mut variables);
        self.save(corpus_name, &variables)?;
        Ok(variables)
    }
}

/// Map a corpus name onto a single safe path component
fn sanitize_dir_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => format!("_{}", cleaned),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = VariableStore::new(dir.path());
        assert_eq!(store.load("timit").unwrap(), CorpusVariables::default());
    }

    #[test]
    fn saved_variables_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = VariableStore::new(dir.path());

        let mut variables = CorpusVariables {
            hierarchy: Some(Hierarchy::from_pairs([(
                "phone".to_string(),
                Some("word".to_string()),
            )])),
            ..Default::default()
        };
        variables
            .audio_files
            .insert("s0101a".to_string(), PathBuf::from("/audio/s0101a.wav"));

        store.save("buckeye", &variables).unwrap();
        assert_eq!(store.load("buckeye").unwrap(), variables);
    }

    #[test]
    fn update_merges_into_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = VariableStore::new(dir.path());
        let stale = store.load("timit").unwrap();

        store
            .update("timit", |v| {
                v.audio_files.insert("s01".to_string(), PathBuf::from("/a/s01.wav"));
            })
            .unwrap();
        let merged = store
            .update("timit", |v| {
                v.hierarchy = Some(Hierarchy::from_pairs([("word".to_string(), None)]));
            })
            .unwrap();

        assert_eq!(stale, CorpusVariables::default());
        assert_eq!(merged.audio_files.len(), 1);
        assert!(merged.hierarchy.is_some());
        assert_eq!(store.load("timit").unwrap(), merged);
    }

    #[test]
    fn corrupt_file_is_a_cache_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = VariableStore::new(dir.path());
        let corpus_dir = store.corpus_dir("timit");
        std::fs::create_dir_all(&corpus_dir).unwrap();
        std::fs::write(corpus_dir.join(VARIABLES_FILE), "{not json").unwrap();

        assert!(matches!(store.load("timit"), Err(CorpusError::Cache(_))));
    }

    #[test]
    fn names_cannot_escape_the_root() {
        assert_eq!(sanitize_dir_name("../etc"), ".._etc");
        assert_eq!(sanitize_dir_name(".."), "_..");
        assert_eq!(sanitize_dir_name("my corpus/v2"), "my_corpus_v2");
        assert_eq!(sanitize_dir_name(""), "_");
    }
}
