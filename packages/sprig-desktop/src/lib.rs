pub mod config;
pub mod input;
pub mod pacer;
pub mod render;
pub mod stage;

pub use config::{StageConfig, StageError};
pub use input::key_from_keycode;
pub use pacer::FramePacer;
pub use stage::Stage;
