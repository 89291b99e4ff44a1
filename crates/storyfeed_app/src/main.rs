//! Storyfeed: a terminal client for the Hacker News search API.
mod app;
mod effects;
mod keys;
mod persistence;
mod ui;

use feed_logging::LogDestination;

fn main() -> std::io::Result<()> {
    // The TUI owns the terminal, so logs go to a file.
    feed_logging::initialize(LogDestination::File);
    app::run_app()
}
