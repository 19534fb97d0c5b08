//! Generator for the desktop cat's Lottie animations.
//!
//! Four documents are produced (idle, speaking, listening, sleeping), each
//! assembled from the character parts in [`parts`] and written as pretty
//! JSON by [`export::generate`].

pub mod config;
pub mod export;
pub mod palette;
pub mod parts;
pub mod scenes;

pub use config::{GeneratorConfig, DEFAULT_OUT_DIR};
pub use export::{generate, to_pretty_json, write_scene, ExportError, Written};
pub use scenes::{Scene, UnknownScene};
