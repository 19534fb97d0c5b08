use crate::scenes::Scene;
use std::path::PathBuf;

/// Asset folder of the desktop pet front-end, relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "src/assets";

/// What to generate and where to put it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub scenes: Vec<Scene>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            scenes: Scene::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Restricts the batch to `scenes`, keeping their catalogue order and
    /// dropping repeats. An empty list keeps all four.
    pub fn with_scenes(mut self, scenes: &[Scene]) -> Self {
        if !scenes.is_empty() {
            self.scenes = Scene::ALL
                .iter()
                .copied()
                .filter(|s| scenes.contains(s))
                .collect();
        }
        self
    }
}
