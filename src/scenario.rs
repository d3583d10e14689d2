//! YAML drag scenarios
//!
//! A scenario is a dock layout plus an optional pointer position. Replaying it
//! builds the overlay over a [`DockArea`], hovers the pointer and checks the
//! resulting drop location against `expect`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::IndicatorConfig;
use crate::dock::DockArea;
use crate::geometry::{Point, Rect};
use crate::indicator::{DropLocation, SegmentedIndicators};

#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub name: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    /// Explicit panel rects as `[x, y, width, height]`
    #[serde(default)]
    pub panels: Vec<[i32; 4]>,
    /// Equal columns, used when `panels` is empty
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Pointer position in screen coordinates (the area sits at the origin)
    #[serde(default)]
    pub pointer: Option<[i32; 2]>,
    /// Drop location the pointer must resolve to
    #[serde(default)]
    pub expect: Option<DropLocation>,
}

fn default_width() -> i32 {
    800
}
fn default_height() -> i32 {
    600
}
fn default_columns() -> usize {
    1
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Every `*.yaml` scenario in `dir`, sorted by file name
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("reading {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .collect();
        paths.sort();

        if paths.is_empty() {
            anyhow::bail!("no scenario files found in {}", dir.display());
        }

        paths.iter().map(|p| Self::load(p)).collect()
    }

    pub fn dock_area(&self) -> DockArea {
        if self.panels.is_empty() {
            DockArea::with_columns(self.width, self.height, self.columns)
        } else {
            let panels = self
                .panels
                .iter()
                .map(|&[x, y, w, h]| Rect::new(x, y, w, h))
                .collect();
            DockArea::with_panels(self.width, self.height, panels)
        }
    }

    /// Build the overlay and replay the pointer
    ///
    /// Fails when the size is not positive or the pointer resolves to a
    /// location other than `expect`.
    pub fn run(&self) -> Result<SegmentedIndicators<DockArea>> {
        if self.width <= 0 || self.height <= 0 {
            anyhow::bail!(
                "scenario {} has invalid size {}x{}",
                self.name,
                self.width,
                self.height
            );
        }

        let mut config = IndicatorConfig::default();
        let mut overlay = SegmentedIndicators::new(self.dock_area(), &mut config);

        let Some([x, y]) = self.pointer else {
            overlay.resize();
            return Ok(overlay);
        };

        let global = Point::new(x, y);
        overlay.host_mut().set_pointer(global);
        overlay.hover(global);
        let location = overlay.host().drop_location();
        tracing::info!(scenario = %self.name, %location, "hovered");

        if let Some(expected) = self.expect {
            if location != expected {
                anyhow::bail!(
                    "scenario {}: pointer resolved to {}, expected {}",
                    self.name,
                    location,
                    expected
                );
            }
        }
        Ok(overlay)
    }
}
