//! Drawable shapes, recursive containers and the display list they draw
//! into. Nothing in this crate touches a window; see `sprig-desktop` for
//! the render driver.

pub mod color;
pub mod container;
pub mod error;
pub mod key;
pub mod node;
pub mod scene;
pub mod shapes;

pub use color::{Color, IntoColor};
pub use container::{ChildId, Container};
pub use error::ShapeError;
pub use key::{Key, KeyColors, KeyEvent, KeyState};
pub use node::{Drawable, IntoPosition, Node};
pub use scene::{DisplayList, DrawCommand, Rect};
pub use shapes::{Border, Buzzer, Circle, Rectangle, Text};

pub use glam::Vec2;
