// Data model shared by the board, its host and the gesture core.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::BoardError;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

pub const BOARD_SLICE_NUMBERS: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

pub const BULL_NUMBER: u8 = 25;
pub const RIM_NUMBER: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlicePart {
    Inner,
    Outer,
    Double,
    Triple,
    None,
}

impl SlicePart {
    pub fn as_str(self) -> &'static str {
        match self {
            SlicePart::Inner => "inner",
            SlicePart::Outer => "outer",
            SlicePart::Double => "double",
            SlicePart::Triple => "triple",
            SlicePart::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId {
    pub number: u8,
    pub part: SlicePart,
}

impl RegionId {
    pub fn new(number: u8, part: SlicePart) -> Self {
        Self { number, part }
    }

    pub fn slice(number: u8, part: SlicePart) -> Self {
        Self::new(number, part)
    }

    pub fn bull(part: SlicePart) -> Self {
        Self::new(BULL_NUMBER, part)
    }

    pub fn rim() -> Self {
        Self::new(RIM_NUMBER, SlicePart::None)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.part.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DartHit {
    pub number: u8,
    #[serde(rename = "slicePart")]
    pub slice_part: SlicePart,
}

impl DartHit {
    /// Short label: `T20`, `D16`, `5`, `25`, `BULL`, `MISS`.
    pub fn label(&self) -> String {
        match (self.number, self.slice_part) {
            (RIM_NUMBER, _) | (_, SlicePart::None) => "MISS".to_string(),
            (BULL_NUMBER, SlicePart::Inner) | (BULL_NUMBER, SlicePart::Double) => "BULL".to_string(),
            (n, SlicePart::Triple) => format!("T{}", n),
            (n, SlicePart::Double) => format!("D{}", n),
            (n, _) => n.to_string(),
        }
    }
}

impl From<RegionId> for DartHit {
    fn from(id: RegionId) -> Self {
        Self {
            number: id.number,
            slice_part: id.part,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigHit {
    pub hit: DartHit,
    #[serde(rename = "isShadow", default)]
    pub is_shadow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub type OverlayColors = HashMap<u8, HashMap<SlicePart, Color>>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub max_zoom: f64,
    pub tick_interval_ms: u32,
    pub zoom_rate: f64,
    /// Fraction of `max_zoom` at which zooming switches to velocity panning.
    pub saturation: f64,
    pub release_step: f64,
    pub pan_dead_zone: f64,
    pub pan_gain: f64,
    pub initial_zoom: f64,
    pub initial_position: [f64; 2],
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_zoom: 7.0,
            tick_interval_ms: 20,
            zoom_rate: 1.25,
            saturation: 0.95,
            release_step: 0.08,
            pan_dead_zone: 0.5,
            pan_gain: 0.3,
            initial_zoom: 1.0,
            initial_position: [0.0, 0.0],
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let config: BoardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        let invalid = |msg: &str| Err(BoardError::InvalidConfig(msg.to_string()));
        if !(self.max_zoom >= 1.0) {
            return invalid("maxZoom must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            return invalid("tickIntervalMs must be positive");
        }
        if !(self.zoom_rate > 0.0) {
            return invalid("zoomRate must be positive");
        }
        if !(self.saturation > 0.0 && self.saturation <= 1.0) {
            return invalid("saturation must be in (0, 1]");
        }
        if !(self.release_step > 0.0 && self.release_step <= 1.0) {
            return invalid("releaseStep must be in (0, 1]");
        }
        if !(self.pan_dead_zone >= 0.0 && self.pan_dead_zone < 1.0) {
            return invalid("panDeadZone must be in [0, 1)");
        }
        if !(self.initial_zoom > 0.0) {
            return invalid("initialZoom must be positive");
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
