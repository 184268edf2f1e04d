use crate::color::{Color, IntoColor};
use crate::error::{ShapeError, non_negative};
use crate::key::{KeyColors, KeyEvent};
use crate::node::{Drawable, IntoPosition, Node, impl_node_access};
use crate::scene::{DisplayList, DrawCommand, Rect};
use glam::Vec2;

use super::Border;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone)]
pub struct Rectangle {
    node: Node,
    size: (u32, u32),
    color: Color,
    border: Border,
    key_colors: KeyColors,
}

impl Rectangle {
    pub fn new(top_left: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            node: Node::new(top_left)?,
            size: (20, 10),
            color: Color::WHITE,
            border: Border::default(),
            key_colors: KeyColors::default(),
        })
    }

    pub(crate) fn derived(top_left: Vec2, size: (u32, u32), color: Color) -> Self {
        Self {
            node: Node::at(top_left),
            size,
            color,
            border: Border::default(),
            key_colors: KeyColors::empty(),
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Result<Self, ShapeError> {
        self.set_size(width, height)?;
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

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Both dimensions are checked before either is stored.
    pub fn set_size(&mut self, width: i32, height: i32) -> Result<(), ShapeError> {
        let width = non_negative("width", width)?;
        let height = non_negative("height", height)?;
        self.size = (width, height);
        Ok(())
    }

    pub fn change_size(&mut self, width_delta: i32, height_delta: i32) {
        let (width, height) = self.size;
        self.size = (
            width.saturating_add_signed(width_delta),
            height.saturating_add_signed(height_delta),
        );
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

    pub fn bounds(&self) -> Rect {
        Rect::new(self.node.position(), self.size.0 as f32, self.size.1 as f32)
    }
}

impl Drawable for Rectangle {
    impl_node_access!();

    fn render(&self, list: &mut DisplayList) {
        let rect = self.bounds();
        list.push(DrawCommand::FillRect {
            rect,
            color: self.color,
        });
        if self.border.is_visible() {
            list.push(DrawCommand::StrokeRect {
                rect,
                width: self.border.width() as f32,
                color: self.border.color(),
            });
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        if let Some(color) = self.key_colors.color_for(event) {
            tracing::trace!(key = %event.key, %color, "rectangle recolored");
            self.color = color;
        }
    }
}
