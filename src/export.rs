//! Serializing documents and writing them to the output directory.

use crate::config::GeneratorConfig;
use crate::scenes::Scene;
use lottie_data::model::LottieJson;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize {scene}")]
    Serialize {
        scene: Scene,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One document on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub scene: Scene,
    pub path: PathBuf,
    /// Size of the pretty-printed text as written, not the compact JSON size.
    pub bytes: usize,
}

/// Pretty JSON with 2-space indentation and declaration-order fields.
pub fn to_pretty_json(doc: &LottieJson) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Builds `scene` and writes it into `out_dir`, which must already exist.
pub fn write_scene(scene: Scene, out_dir: &Path) -> Result<Written, ExportError> {
    let doc = scene.build();
    let text = to_pretty_json(&doc).map_err(|source| ExportError::Serialize { scene, source })?;

    let path = out_dir.join(scene.file_name());
    fs::write(&path, &text).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = text.len(), "wrote animation");
    Ok(Written {
        scene,
        path,
        bytes: text.len(),
    })
}

/// Creates the output directory and writes every configured scene in order.
/// The first failure aborts the batch.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<Written>, ExportError> {
    fs::create_dir_all(&config.out_dir).map_err(|source| ExportError::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;

    config
        .scenes
        .iter()
        .map(|&scene| write_scene(scene, &config.out_dir))
        .collect()
}
