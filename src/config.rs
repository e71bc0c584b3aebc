use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// One output file: edge length in pixels plus file name under `out_dir`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file: String,
}

impl IconTarget {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            file: format!("icon-{size}.png"),
        }
    }
}

/// Where icons go and at which sizes. Colors and geometry are fixed and
/// intentionally not configurable.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IconConfig {
    pub out_dir: PathBuf,
    pub targets: Vec<IconTarget>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("public"),
            targets: vec![IconTarget::for_size(192), IconTarget::for_size(512)],
        }
    }
}

impl IconConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Replace the target list with `icon-<N>.png` entries, keeping `out_dir`.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.targets = sizes.into_iter().map(IconTarget::for_size).collect();
        self
    }

    /// `(size, out_dir/file)` pairs in declaration order.
    pub fn resolved_targets(&self) -> Vec<(u32, PathBuf)> {
        self.targets
            .iter()
            .map(|t| (t.size, self.out_dir.join(&t.file)))
            .collect()
    }

    /// Suspicious values as human-readable warnings. Nothing here is fatal;
    /// log each one with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.targets.is_empty() {
            w.push("targets is empty; no icons will be written".into());
        }
        let mut seen = HashSet::new();
        for t in &self.targets {
            if t.size == 0 {
                w.push(format!("target {}: size must be > 0", t.file));
            } else if t.size < 16 {
                w.push(format!(
                    "target {}: size {} very small; cells collapse to a few pixels",
                    t.file, t.size
                ));
            }
            if !t.file.to_ascii_lowercase().ends_with(".png") {
                w.push(format!("target {}: file has no .png extension", t.file));
            }
            if !seen.insert(t.file.as_str()) {
                w.push(format!(
                    "target {}: duplicate file name; later entry overwrites earlier",
                    t.file
                ));
            }
        }
        w
    }
}
