//! Terminal rendering for the storyfeed shell.
mod constants;
mod render;

pub use render::render;
