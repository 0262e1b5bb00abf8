//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Speech Corpus Tools");

    // Connection form
    m.insert(Key::HostLabel, "IP address (or localhost)");
    m.insert(Key::PortLabel, "Port");
    m.insert(Key::UserLabel, "Username (optional)");
    m.insert(Key::PasswordLabel, "Password (optional)");
    m.insert(Key::Connect, "Connect");

    // Connection status
    m.insert(Key::StatusDisconnected, "Not connected");
    m.insert(Key::StatusConnecting, "Connecting...");
    m.insert(Key::StatusConnected, "Connected");
    m.insert(Key::StatusFailed, "Connection failed");

    // Corpora list
    m.insert(Key::AvailableCorpora, "Available corpora");
    m.insert(Key::NoCorpora, "No corpora listed");
    m.insert(Key::AnnotationTypes, "Annotation types");

    // Audio lookup
    m.insert(Key::FindAudio, "Find local audio files");
    m.insert(Key::SelectCorpus, "Select a corpus");
    m.insert(Key::Searching, "Searching...");
    m.insert(Key::AudioFound, "Audio found");
    m.insert(Key::SelectAudioDirectory, "Select Directory");
    m.insert(
        Key::AudioScanIncomplete,
        "Audio search finished, but some discourses have no audio",
    );
    m.insert(Key::AudioScanFailed, "Audio search failed");

    // Cache
    m.insert(Key::ResetCache, "Reset local cache");
    m.insert(Key::CacheResetDone, "Local cache reset");

    // Dialogs
    m.insert(Key::InvalidInformation, "Invalid information");
    m.insert(
        Key::InvalidHost,
        "IP address must be specified or named 'localhost'.",
    );
    m.insert(Key::InvalidPort, "Port must be an integer.");
    m.insert(Key::ConnectFailed, "Could not connect to server");
    m.insert(Key::OperationFailed, "Operation failed");
    m.insert(Key::Ok, "OK");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
