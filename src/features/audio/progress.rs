//! Audio scan progress reporting

use async_stream::stream;
use futures_util::Stream;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Update sent while scanning a directory for corpus audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioScanProgress {
    /// Directory walked, matching begins
    Started { discourses: usize, files: usize },
    /// A discourse was paired with an audio file
    Matched { discourse: String, path: PathBuf },
    /// Scan finished and the matches were cached
    Completed { found: usize, missing: usize },
    /// Scan could not finish
    Failed(String),
}

impl AudioScanProgress {
    /// `Some(success)` for the terminal update, `None` for intermediate ones
    ///
    /// A scan succeeds only when it matched something and left nothing out.
    pub fn outcome(&self) -> Option<bool> {
        match self {
            AudioScanProgress::Completed { found, missing } => Some(*found > 0 && *missing == 0),
            AudioScanProgress::Failed(_) => Some(false),
            _ => None,
        }
    }
}

/// Progress sender for reporting scan updates
pub type ProgressSender = mpsc::UnboundedSender<AudioScanProgress>;
/// Progress receiver for receiving scan updates
pub type ProgressReceiver = mpsc::UnboundedReceiver<AudioScanProgress>;

/// Create a new progress channel
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    mpsc::unbounded_channel()
}

/// Receiving end of a launched scan
#[derive(Debug)]
pub struct ScanHandle {
    rx: ProgressReceiver,
}

impl ScanHandle {
    pub fn new(rx: ProgressReceiver) -> Self {
        Self { rx }
    }

    /// Stream of progress that always ends with exactly one terminal update
    ///
    /// If the worker stops without reporting, a `Failed` is synthesised.
    pub fn into_stream(self) -> impl Stream<Item = AudioScanProgress> + Send + 'static {
        let mut rx = self.rx;
        stream! {
            let mut finished = false;
            while let Some(progress) = rx.recv().await {
                finished = progress.outcome().is_some();
                yield progress;
                if finished {
                    break;
                }
            }
            if !finished {
                yield AudioScanProgress::Failed("audio scan stopped unexpectedly".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn outcome_needs_full_match() {
        assert_eq!(
            AudioScanProgress::Completed { found: 3, missing: 0 }.outcome(),
            Some(true)
        );
        assert_eq!(
            AudioScanProgress::Completed { found: 2, missing: 1 }.outcome(),
            Some(false)
        );
        assert_eq!(
            AudioScanProgress::Completed { found: 0, missing: 0 }.outcome(),
            Some(false)
        );
        assert_eq!(
            AudioScanProgress::Started { discourses: 1, files: 1 }.outcome(),
            None
        );
    }

    #[tokio::test]
    async fn stream_stops_after_terminal_update() {
        let (tx, rx) = progress_channel();
        tx.send(AudioScanProgress::Started { discourses: 1, files: 1 })
            .unwrap();
        tx.send(AudioScanProgress::Completed { found: 1, missing: 0 })
            .unwrap();
        tx.send(AudioScanProgress::Failed("late".into())).unwrap();

        let updates: Vec<_> = ScanHandle::new(rx).into_stream().collect().await;
        assert_eq!(updates.len(), 2);
        assert_eq!(updates.last().and_then(|p| p.outcome()), Some(true));
    }

    #[tokio::test]
    async fn dropped_worker_reports_failure() {
        let (tx, rx) = progress_channel();
        tx.send(AudioScanProgress::Started { discourses: 2, files: 0 })
            .unwrap();
        drop(tx);

        let updates: Vec<_> = ScanHandle::new(rx).into_stream().collect().await;
        assert!(matches!(updates.last(), Some(AudioScanProgress::Failed(_))));
    }
}
