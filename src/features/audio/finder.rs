//! Recursive audio directory scanner
//!
//! Walks a directory for audio files, pairs them with the corpus'
//! discourses by file stem and caches the pairing in the corpus variables.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use walkdir::WalkDir;

use super::is_audio_file;
use super::progress::{AudioScanProgress, ProgressSender, ScanHandle, progress_channel};
use crate::corpus::{CorpusConfig, CorpusContext, CorpusError, CorpusService, VariableStore};

/// All audio files below `root`, sorted for stable matching
pub fn discover_audio_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| is_audio_file(p))
        .collect();
    files.sort();
    files
}

/// Pair discourse names with audio files by file stem
///
/// Exact stem matches win; otherwise a case-insensitive match is accepted.
/// When several files share a stem the first in path order is used.
pub fn match_discourses(discourses: &[String], files: &[PathBuf]) -> BTreeMap<String, PathBuf> {
    let mut exact: HashMap<&str, &PathBuf> = HashMap::new();
    let mut folded: HashMap<String, &PathBuf> = HashMap::new();
    for file in files {
        if let Some(stem) = file.file_stem().and_then(|s| s.to_str()) {
            exact.entry(stem).or_insert(file);
            folded.entry(stem.to_lowercase()).or_insert(file);
        }
    }

    discourses
        .iter()
        .filter_map(|name| {
            let file = exact
                .get(name.as_str())
                .or_else(|| folded.get(&name.to_lowercase()))?;
            Some((name.clone(), (*file).clone()))
        })
        .collect()
}

/// Scan `directory` for the audio of `config.corpus_name`
///
/// This is the body of the finder worker; it reports progress via the
/// channel and leaves the terminal update to the caller on error.
pub async fn find_audio(
    service: Arc<dyn CorpusService>,
    store: VariableStore,
    config: CorpusConfig,
    directory: PathBuf,
    progress_tx: ProgressSender,
) -> Result<(), CorpusError> {
    let start_time = Instant::now();
    let mut context = CorpusContext::open(config, service, store)?;
    let discourses = context.discourses().await?;

    let files = tokio::task::spawn_blocking({
        let directory = directory.clone();
        move || discover_audio_files(&directory)
    })
    .await
    .map_err(|e| CorpusError::Task(e.to_string()))?;

    let _ = progress_tx.send(AudioScanProgress::Started {
        discourses: discourses.len(),
        files: files.len(),
    });

    let matches = match_discourses(&discourses, &files);
    for (discourse, path) in &matches {
        let _ = progress_tx.send(AudioScanProgress::Matched {
            discourse: discourse.clone(),
            path: path.clone(),
        });
    }

    let found = matches.len();
    let missing = discourses.len() - found;
    context.add_audio_files(matches);
    context.save_variables()?;

    tracing::info!(
        "Audio scan of {} for '{}': {} found, {} missing in {:.2}s",
        directory.display(),
        context.config().corpus_name,
        found,
        missing,
        start_time.elapsed().as_secs_f64()
    );
    let _ = progress_tx.send(AudioScanProgress::Completed { found, missing });
    Ok(())
}

/// Launches audio directory scans
#[derive(Clone)]
pub struct AudioFinder {
    service: Arc<dyn CorpusService>,
    store: VariableStore,
}

impl AudioFinder {
    pub fn new(service: Arc<dyn CorpusService>, store: VariableStore) -> Self {
        Self { service, store }
    }

    /// Start a scan in the background
    ///
    /// Every call launches a new scan, even while another is running.
    pub fn start(&self, config: CorpusConfig, directory: PathBuf) -> ScanHandle {
        let (tx, rx) = progress_channel();
        let service = self.service.clone();
        let store = self.store.clone();

        tokio::spawn(async move {
            if let Err(e) = find_audio(service, store, config, directory, tx.clone()).await {
                tracing::error!("Audio scan error: {}", e);
                let _ = tx.send(AudioScanProgress::Failed(e.to_string()));
            }
        });

        ScanHandle::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::testing::FakeService;
    use futures_util::StreamExt;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, b"RIFF").unwrap();
    }

    #[test]
    fn discovers_nested_audio_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.wav"));
        touch(&dir.path().join("speaker1/b.flac"));
        touch(&dir.path().join("speaker1/b.TextGrid"));

        let files = discover_audio_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_audio_file(f)));
    }

    #[test]
    fn exact_stem_beats_case_fold() {
        let files = vec![
            PathBuf::from("/a/S0101A.wav"),
            PathBuf::from("/b/s0101a.wav"),
            PathBuf::from("/b/s0102a.WAV"),
        ];
        let discourses = vec![
            "s0101a".to_string(),
            "S0102A".to_string(),
            "s0103a".to_string(),
        ];
        let matches = match_discourses(&discourses, &files);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches["s0101a"], PathBuf::from("/b/s0101a.wav"));
        assert_eq!(matches["S0102A"], PathBuf::from("/b/s0102a.WAV"));
        assert!(!matches.contains_key("s0103a"));
    }

    #[tokio::test]
    async fn scan_caches_matches_and_completes_once() {
        let audio = tempfile::tempdir().unwrap();
        touch(&audio.path().join("s01.wav"));
        touch(&audio.path().join("nested/s02.wav"));

        let cache = tempfile::tempdir().unwrap();
        let store = VariableStore::new(cache.path());
        let service = Arc::new(FakeService {
            discourses: vec!["s01".into(), "s02".into()],
            ..Default::default()
        });

        let handle = AudioFinder::new(service, store.clone()).start(
            CorpusConfig::new("timit", "localhost", 7474),
            audio.path().to_path_buf(),
        );
        let updates: Vec<_> = handle.into_stream().collect().await;

        let terminal: Vec<_> = updates.iter().filter_map(|p| p.outcome()).collect();
        assert_eq!(terminal, vec![true]);
        assert_eq!(store.load("timit").unwrap().audio_files.len(), 2);
    }

    #[tokio::test]
    async fn partial_match_is_not_success() {
        let audio = tempfile::tempdir().unwrap();
        touch(&audio.path().join("s01.wav"));

        let cache = tempfile::tempdir().unwrap();
        let service = Arc::new(FakeService {
            discourses: vec!["s01".into(), "s02".into()],
            ..Default::default()
        });

        let handle = AudioFinder::new(service, VariableStore::new(cache.path())).start(
            CorpusConfig::new("timit", "localhost", 7474),
            audio.path().to_path_buf(),
        );
        let updates: Vec<_> = handle.into_stream().collect().await;
        assert_eq!(
            updates.last(),
            Some(&AudioScanProgress::Completed { found: 1, missing: 1 })
        );
    }

    #[tokio::test]
    async fn reset_during_scan_survives_scan_save() {
        use crate::corpus::{CorpusVariables, Hierarchy, reset_hierarchy};
        use std::time::Duration;

        const SYLLABIC: &str = "syllabic";

        let audio = tempfile::tempdir().unwrap();
        touch(&audio.path().join("s01.wav"));

        let cache = tempfile::tempdir().unwrap();
        let store = VariableStore::new(cache.path());
        let with_syllabic = Hierarchy::from_pairs([
            ("phone".to_string(), Some(SYLLABIC.to_string())),
            (SYLLABIC.to_string(), Some("word".to_string())),
            ("word".to_string(), None),
        ]);
        let cached = CorpusVariables {
            hierarchy: Some(with_syllabic.clone()),
            ..Default::default()
        };
        store.save("timit", &cached).unwrap();

        let service = Arc::new(FakeService {
            hierarchy: with_syllabic,
            discourses: vec!["s01".into()],
            discourse_delay: Some(Duration::from_millis(300)),
            ..Default::default()
        });
        let config = CorpusConfig::new("timit", "localhost", 7474);

        let handle = AudioFinder::new(service.clone(), store.clone())
            .start(config.clone(), audio.path().to_path_buf());
        // Let the scan open its session and block on the discourse query
        tokio::time::sleep(Duration::from_millis(50)).await;
        reset_hierarchy(service, store.clone(), config).await.unwrap();

        let updates: Vec<_> = handle.into_stream().collect().await;
        assert_eq!(updates.last().and_then(|p| p.outcome()), Some(true));

        let variables = store.load("timit").unwrap();
        assert!(!variables.hierarchy.unwrap().contains(SYLLABIC));
        assert_eq!(variables.audio_files.len(), 1);
    }

    #[tokio::test]
    async fn overlapping_scans_keep_each_others_matches() {
        let first = tempfile::tempdir().unwrap();
        touch(&first.path().join("s01.wav"));
        let second = tempfile::tempdir().unwrap();
        touch(&second.path().join("s02.wav"));

        let cache = tempfile::tempdir().unwrap();
        let store = VariableStore::new(cache.path());
        let service = Arc::new(FakeService {
            discourses: vec!["s01".into(), "s02".into()],
            discourse_delay: Some(std::time::Duration::from_millis(100)),
            ..Default::default()
        });
        let finder = AudioFinder::new(service, store.clone());
        let config = CorpusConfig::new("timit", "localhost", 7474);

        let a = finder.start(config.clone(), first.path().to_path_buf());
        let b = finder.start(config, second.path().to_path_buf());
        let _: Vec<_> = a.into_stream().collect().await;
        let _: Vec<_> = b.into_stream().collect().await;

        let audio_files = store.load("timit").unwrap().audio_files;
        assert_eq!(audio_files["s01"], first.path().join("s01.wav"));
        assert_eq!(audio_files["s02"], second.path().join("s02.wav"));
    }

    #[tokio::test]
    async fn missing_corpus_fails_the_scan() {
        let cache = tempfile::tempdir().unwrap();
        let handle = AudioFinder::new(
            Arc::new(FakeService::default()),
            VariableStore::new(cache.path()),
        )
        .start(CorpusConfig::new("", "localhost", 7474), PathBuf::from("."));

        let updates: Vec<_> = handle.into_stream().collect().await;
        assert_eq!(updates.len(), 1);
        assert!(matches!(updates[0], AudioScanProgress::Failed(_)));
    }
}
