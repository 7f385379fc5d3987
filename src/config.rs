// Loading config.toml: window size, canvas, brush colors and pencil options.
// Every section and field is optional; missing values fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::options::PencilOptions;
use crate::tool::{usable_width, ToolInputs};
use crate::types::Rgba;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub pencil: PencilOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 800, height: 600, title: "Smooth Pencil".into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub background: [u8; 4],
    pub export_path: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { background: [255, 255, 255, 255], export_path: PathBuf::from("canvas.png") }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub line_width: f32,
    pub primary_color: [u8; 4],
    pub secondary_color: [u8; 4],
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            line_width: 5.0,
            primary_color: [20, 20, 20, 255],
            secondary_color: [220, 40, 40, 255],
        }
    }
}

impl BrushConfig {
    pub fn tool_inputs(&self) -> ToolInputs {
        ToolInputs {
            line_width: usable_width(self.line_width),
            primary_color: Rgba::from_rgba8(self.primary_color),
            secondary_color: Rgba::from_rgba8(self.secondary_color),
        }
    }
}

impl Config {
    /// Look for config.toml next to the executable, then in the working
    /// directory. No file at all means defaults; a broken file is an error.
    pub fn load() -> Result<Self, Error> {
        match Self::find() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn background(&self) -> Rgba {
        Rgba::from_rgba8(self.canvas.background)
    }

    fn find() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));
        exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .find(|p| p.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PencilOperator, PencilShape};

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.pencil, PencilOptions::default());
        assert_eq!(config.background(), Rgba::WHITE);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(
            r#"
            [window]
            width = 320

            [brush]
            line_width = 8.0
            secondary_color = [0, 0, 255, 255]

            [pencil]
            shape = "square"
            operator = "eraser"
            smoothed = false
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 600);
        let inputs = config.brush.tool_inputs();
        assert_eq!(inputs.line_width, 8.0);
        assert_eq!(inputs.secondary_color, Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(config.pencil.shape, PencilShape::Square);
        assert_eq!(config.pencil.operator, PencilOperator::Eraser);
        assert!(!config.pencil.smoothed);
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(Config::parse("[pencil]\nshape = \"blob\"").is_err());
    }

    #[test]
    fn non_positive_width_falls_back_to_one() {
        let brush = BrushConfig { line_width: 0.0, ..Default::default() };
        assert_eq!(brush.tool_inputs().line_width, 1.0);
    }
}
