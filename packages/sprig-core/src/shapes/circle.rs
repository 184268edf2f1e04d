use crate::color::{Color, IntoColor};
use crate::error::{ShapeError, non_negative};
use crate::key::{KeyColors, KeyEvent};
use crate::node::{Drawable, IntoPosition, Node, impl_node_access};
use crate::scene::{DisplayList, DrawCommand};

use super::Border;

#[derive(Debug, Clone)]
pub struct Circle {
    node: Node,
    radius: u32,
    color: Color,
    border: Border,
    key_colors: KeyColors,
}

impl Circle {
    /// White circle of radius 10 centred on `center`.
    pub fn new(center: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            node: Node::new(center)?,
            radius: 10,
            color: Color::WHITE,
            border: Border::default(),
            key_colors: KeyColors::default(),
        })
    }

    pub fn with_radius(mut self, radius: i32) -> Result<Self, ShapeError> {
        self.set_radius(radius)?;
        Ok(self)
    }

    pub fn with_color(mut self, color: impl IntoColor) -> Result<Self, ShapeError> {
        self.set_color(color)?;
        Ok(self)
    }

    pub fn with_border(mut self, width: i32, color: impl IntoColor) -> Result<Self, ShapeError> {
        self.border = Border::new(width, color)?;
        Ok(self)
    }

    pub fn hidden(mut self) -> Self {
        self.node.set_visible(false);
        self
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) -> Result<(), ShapeError> {
        self.radius = non_negative("radius", radius)?;
        Ok(())
    }

    /// Grows or shrinks the radius by `amount`, stopping at zero.
    pub fn change_size(&mut self, amount: i32) {
        self.radius = self.radius.saturating_add_signed(amount);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.color = color.into_color()?;
        Ok(())
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn border_mut(&mut self) -> &mut Border {
        &mut self.border
    }

    pub fn key_colors(&self) -> &KeyColors {
        &self.key_colors
    }

    pub fn key_colors_mut(&mut self) -> &mut KeyColors {
        &mut self.key_colors
    }
}

impl Drawable for Circle {
    impl_node_access!();

    fn render(&self, list: &mut DisplayList) {
        let center = self.node.position();
        let radius = self.radius as f32;
        list.push(DrawCommand::FillCircle {
            center,
            radius,
            color: self.color,
        });
        if self.border.is_visible() {
            list.push(DrawCommand::StrokeCircle {
                center,
                radius,
                width: self.border.width() as f32,
                color: self.border.color(),
            });
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        if let Some(color) = self.key_colors.color_for(event) {
            tracing::trace!(key = %event.key, %color, "circle recolored");
            self.color = color;
        }
    }
}
