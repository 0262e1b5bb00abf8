//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod audio;
pub mod connection;
pub mod settings;

pub use connection::{AudioLookup, ConnectPanel, ConnectionState, Effect, Feedback};
pub use settings::Settings;
