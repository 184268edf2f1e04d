pub mod buzzer;
pub mod circle;
pub mod rectangle;
pub mod text;

pub use buzzer::Buzzer;
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::color::{Color, IntoColor};
use crate::error::{ShapeError, non_negative};

/// Outline stroked after the fill. A zero width draws nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    width: u32,
    color: Color,
}

impl Border {
    pub fn new(width: i32, color: impl IntoColor) -> Result<Self, ShapeError> {
        Ok(Self {
            width: non_negative("border width", width)?,
            color: color.into_color()?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: i32) -> Result<(), ShapeError> {
        self.width = non_negative("border width", width)?;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.color = color.into_color()?;
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0
    }
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0,
            color: Color::BLACK,
        }
    }
}
