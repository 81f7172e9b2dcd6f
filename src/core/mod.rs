//! Path resolution, YAML documents, rendering and file output.

pub mod config;
pub mod document;
pub mod output;
pub mod paths;
pub mod render;
pub mod utils;
