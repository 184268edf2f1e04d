use serde::Deserialize;
use sprig_core::Color;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("window size must be two positive integers, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("frame rate must be positive")]
    InvalidFrameRate,

    #[error("failed to read stage config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse stage config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graphics backend error: {0}")]
    Graphics(#[from] ggez::GameError),
}

/// Window and frame settings for a [`crate::Stage`].
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub background: Color,
    pub frame_rate: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            title: "Container Display".to_string(),
            window_size: (800, 600),
            background: Color::rgb(30, 30, 30),
            frame_rate: 60,
        }
    }
}

impl StageConfig {
    pub fn from_json_str(json: &str) -> Result<Self, StageError> {
        let config: StageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StageError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn validate(&self) -> Result<(), StageError> {
        let (width, height) = self.window_size;
        if width == 0 || height == 0 {
            return Err(StageError::InvalidWindowSize { width, height });
        }
        if self.frame_rate == 0 {
            return Err(StageError::InvalidFrameRate);
        }
        Ok(())
    }
}
