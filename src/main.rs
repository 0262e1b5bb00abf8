//! speechtools - desktop client for speech corpus databases
//! Built with iced; connects to a corpus graph server and manages local audio

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod corpus;
mod features;
mod i18n;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Initialize tracing for logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(980.0, 560.0))
        .run()
}
