use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Source image, relative to the config file's directory.
    pub input: PathBuf,

    #[serde(default, skip_serializing_if = "OutputConfig::is_default")]
    pub output: OutputConfig,

    #[serde(default, skip_serializing_if = "MatteConfig::is_default")]
    pub matte: MatteConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// PNG destination (default: "app_icon.png")
    #[serde(default = "default_png_path")]
    pub png: PathBuf,

    /// ICO destination (default: "app.ico")
    #[serde(default = "default_ico_path")]
    pub ico: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            png: default_png_path(),
            ico: default_ico_path(),
        }
    }
}

impl OutputConfig {
    fn is_default(&self) -> bool {
        self.png == default_png_path() && self.ico == default_ico_path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MatteConfig {
    /// Per-channel white-key threshold; a pixel is background when all of
    /// R, G, B are strictly above it (default: 240)
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Recolor keyed pixels from their opaque neighbors before the ICO
    /// renditions are resampled (default: false)
    #[serde(default)]
    pub bleed: bool,
}

impl Default for MatteConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            bleed: false,
        }
    }
}

impl MatteConfig {
    fn is_default(&self) -> bool {
        self.threshold == default_threshold() && !self.bleed
    }
}

fn default_png_path() -> PathBuf {
    PathBuf::from("app_icon.png")
}

fn default_ico_path() -> PathBuf {
    PathBuf::from("app.ico")
}

fn default_threshold() -> u8 {
    240
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn default_template() -> String {
        r#"# icoforge configuration

input = "icon.png"     # Source image (PNG or anything that decodes to RGBA)

# Output paths
# [output]
# png = "app_icon.png"  # Cleaned, squared artwork
# ico = "app.ico"       # Multi-size icon (256/128/64/48/32/16)

# Background removal
# [matte]
# threshold = 240      # A pixel is background when R, G and B all exceed this
# bleed = false        # Recolor keyed pixels from neighbors (fixes resize halos)
"#
        .to_string()
    }
}
