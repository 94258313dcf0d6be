use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CamoError;
use crate::input::PngPairSource;
use crate::pipeline::stage1_viewport::ViewportPoint;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchManifest {
    pub frames: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub general: PathBuf,
    pub target: PathBuf,
    #[serde(default)]
    pub viewport: Option<[f32; 2]>,
}

impl ManifestEntry {
    pub fn viewport_point(&self) -> Option<ViewportPoint> {
        self.viewport.map(|[x, y]| ViewportPoint::new(x, y))
    }

    pub fn source(&self) -> PngPairSource {
        PngPairSource::new(self.general.clone(), self.target.clone())
            .with_viewport(self.viewport_point())
    }
}

impl BatchManifest {
    /// Relative image paths resolve against the manifest's directory.
    pub fn load(path: &Path) -> Result<Self, CamoError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CamoError::io(path, e))?;
        let mut manifest: BatchManifest = serde_json::from_str(&raw)?;
        let base = path.parent().unwrap_or(Path::new("."));
        for entry in &mut manifest.frames {
            entry.general = resolve(base, &entry.general);
            entry.target = resolve(base, &entry.target);
        }
        Ok(manifest)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
