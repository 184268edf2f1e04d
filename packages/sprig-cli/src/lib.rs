pub mod demo;

use clap::{Args, Parser, Subcommand};
use sprig_core::Color;
use sprig_desktop::{StageConfig, StageError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprig")]
#[command(about = "Draw nested shape containers in a window", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a window with the demo scene
    Run(StageArgs),
    /// Print one frame of the demo scene's draw commands without opening a window
    Dump,
}

#[derive(Args, Default)]
pub struct StageArgs {
    /// JSON stage config; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Window title
    #[arg(long)]
    pub title: Option<String>,
    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,
    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,
    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,
    /// Background color, by name or as #rrggbb
    #[arg(long)]
    pub background: Option<Color>,
}

impl StageArgs {
    pub fn stage_config(&self) -> Result<StageConfig, StageError> {
        let mut config = match &self.config {
            Some(path) => StageConfig::from_json_file(path)?,
            None => StageConfig::default(),
        };
        if let Some(title) = &self.title {
            config = config.with_title(title);
        }
        let (width, height) = config.window_size;
        config = config.with_window_size(
            self.width.unwrap_or(width),
            self.height.unwrap_or(height),
        );
        if let Some(fps) = self.fps {
            config = config.with_frame_rate(fps);
        }
        if let Some(background) = self.background {
            config = config.with_background(background);
        }
        config.validate()?;
        Ok(config)
    }
}
