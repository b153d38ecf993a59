use crate::graph::Viewport;
use crate::image::Rgb;
use crate::session::SessionOptions;
use crate::smoothing::SmoothingOptions;
use crate::types::GridPoint;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TraceToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Gaussian pre-filter; omitted means trace the raw image.
    #[serde(default)]
    pub smoothing: Option<SmoothingOptions>,
    #[serde(default)]
    pub viewport: Viewport,
    /// Anchors in image-global `(row, col)` order of placement.
    pub anchors: Vec<GridPoint>,
    /// Connect the last anchor back to the first one.
    #[serde(default = "default_close")]
    pub close: bool,
    #[serde(default)]
    pub overlay: OverlayConfig,
    pub output: TraceOutputConfig,
}

fn default_close() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Boundary colour as `[r, g, b]`.
    pub color: [u8; 3],
    /// Draw on the smoothed image instead of the input.
    pub use_smoothed: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            use_smoothed: false,
        }
    }
}

impl OverlayConfig {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.color[0], self.color[1], self.color[2])
    }
}

#[derive(Debug, Deserialize)]
pub struct TraceOutputConfig {
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    #[serde(rename = "path_json")]
    pub path_json: PathBuf,
}

impl TraceToolConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            smoothing: self.smoothing,
            viewport: self.viewport,
            ..SessionOptions::default()
        }
    }
}

pub fn load_config(path: &Path) -> Result<TraceToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<TraceToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "anchors": [{"row": 1, "col": 2}, {"row": 5, "col": 9}],
                "output": {"overlay_image": "out/overlay.png", "path_json": "out/path.json"}
            }"#,
        )
        .unwrap();
        assert!(cfg.close);
        assert!(cfg.smoothing.is_none());
        assert_eq!(cfg.viewport, Viewport::default());
        assert_eq!(cfg.anchors[1], GridPoint::new(5, 9));
        assert_eq!(cfg.overlay.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn smoothing_and_viewport_are_forwarded() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "smoothing": {"size": 4, "sigma": 1.5},
                "viewport": {"x": -100, "y": -40},
                "anchors": [],
                "close": false,
                "output": {"overlay_image": "o.png", "path_json": "p.json"}
            }"#,
        )
        .unwrap();
        let opts = cfg.session_options();
        assert_eq!(opts.smoothing, Some(SmoothingOptions::new(4, 1.5)));
        assert_eq!(opts.viewport, Viewport::new(-100, -40));
        assert!(!cfg.close);
    }
}
