//! Renderer settings.
//!
//! Loaded from JSON by the viewer; every field has a default so a partial
//! file (or none at all) is fine.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Things that can go wrong when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Ray density.  Lower quality stretches each ray over a wider column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum RenderQuality {
    VeryLow,
    Low,
    Medium,
    High,
    #[default]
    Ultra,
}

impl RenderQuality {
    pub const ALL: [RenderQuality; 5] = [
        RenderQuality::VeryLow,
        RenderQuality::Low,
        RenderQuality::Medium,
        RenderQuality::High,
        RenderQuality::Ultra,
    ];

    /// Screen pixels covered by one ray.
    pub fn column_pixel_width(self) -> u32 {
        match self {
            RenderQuality::VeryLow => 8,
            RenderQuality::Low => 5,
            RenderQuality::Medium => 4,
            RenderQuality::High => 2,
            RenderQuality::Ultra => 1,
        }
    }

    /// Cycle very-low → … → ultra → very-low.
    pub fn next(self) -> Self {
        match self {
            RenderQuality::VeryLow => RenderQuality::Low,
            RenderQuality::Low => RenderQuality::Medium,
            RenderQuality::Medium => RenderQuality::High,
            RenderQuality::High => RenderQuality::Ultra,
            RenderQuality::Ultra => RenderQuality::VeryLow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderQuality::VeryLow => "very-low",
            RenderQuality::Low => "low",
            RenderQuality::Medium => "medium",
            RenderQuality::High => "high",
            RenderQuality::Ultra => "ultra",
        }
    }

}

/// Case-insensitive; `_` and `-` are interchangeable.
impl FromStr for RenderQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "very-low" | "verylow" => Ok(RenderQuality::VeryLow),
            "low" => Ok(RenderQuality::Low),
            "medium" | "med" => Ok(RenderQuality::Medium),
            "high" => Ok(RenderQuality::High),
            "ultra" => Ok(RenderQuality::Ultra),
            _ => Err(format!("unknown quality `{s}`")),
        }
    }
}

/// How wall columns are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShadingMode {
    #[default]
    Textured,
    Flat,
}

impl ShadingMode {
    pub fn toggle(self) -> Self {
        match self {
            ShadingMode::Textured => ShadingMode::Flat,
            ShadingMode::Flat => ShadingMode::Textured,
        }
    }
}

/// What the viewer shows: first-person view or the top-down automap,
/// optionally with debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawMode {
    #[default]
    Game,
    GameDebug,
    Map,
    MapDebug,
}

impl DrawMode {
    /// TAB order: game → game+debug → map → map+debug → game.
    pub fn next(self) -> Self {
        match self {
            DrawMode::Game => DrawMode::GameDebug,
            DrawMode::GameDebug => DrawMode::Map,
            DrawMode::Map => DrawMode::MapDebug,
            DrawMode::MapDebug => DrawMode::Game,
        }
    }

    pub fn is_map(self) -> bool {
        matches!(self, DrawMode::Map | DrawMode::MapDebug)
    }

    pub fn is_debug(self) -> bool {
        matches!(self, DrawMode::GameDebug | DrawMode::MapDebug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Off-screen viewport the engine renders into (pixels).
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Horizontal field of view in degrees.
    pub fov_deg: f32,
    /// Rays give up after this many map units.
    pub draw_distance: f32,
    /// Lower = less "light" around the camera.
    pub brightness_scaler: f32,
    pub quality: RenderQuality,
    pub shading: ShadingMode,
    pub ceiling_color: Color,
    pub floor_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 640,
            viewport_height: 480,
            fov_deg: 70.0,
            draw_distance: 20.0,
            brightness_scaler: 4.0,
            quality: RenderQuality::Ultra,
            shading: ShadingMode::Textured,
            ceiling_color: Color::LIGHT_GRAY,
            floor_color: Color::DARK_GRAY,
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the engine cannot render with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width < 2 || self.viewport_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport {}x{} too small",
                self.viewport_width, self.viewport_height
            )));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov {} outside (0, 180)",
                self.fov_deg
            )));
        }
        if !(self.draw_distance > 0.0 && self.draw_distance.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "draw distance {} must be positive",
                self.draw_distance
            )));
        }
        if !(self.brightness_scaler > 0.0 && self.brightness_scaler.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "brightness scaler {} must be positive",
                self.brightness_scaler
            )));
        }
        if self.quality.column_pixel_width() > self.viewport_width {
            return Err(ConfigError::Invalid(format!(
                "column width {} wider than viewport",
                self.quality.column_pixel_width()
            )));
        }
        Ok(())
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
