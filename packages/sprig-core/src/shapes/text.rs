use crate::color::{Color, IntoColor};
use crate::error::{ShapeError, positive};
use crate::key::{KeyColors, KeyEvent};
use crate::node::{Drawable, IntoPosition, Node, impl_node_access};
use crate::scene::{DisplayList, DrawCommand};

/// Single line of text in the backend's default font, anchored top-left.
#[derive(Debug, Clone)]
pub struct Text {
    node: Node,
    content: String,
    color: Color,
    font_size: u32,
    key_colors: KeyColors,
}

impl Text {
    pub fn new(origin: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            node: Node::new(origin)?,
            content: "no text".to_string(),
            color: Color::WHITE,
            font_size: 36,
            key_colors: KeyColors::default(),
        })
    }

    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_color(mut self, color: impl IntoColor) -> Result<Self, ShapeError> {
        self.set_color(color)?;
        Ok(self)
    }

    pub fn with_font_size(mut self, font_size: i32) -> Result<Self, ShapeError> {
        self.set_font_size(font_size)?;
        Ok(self)
    }

    pub fn hidden(mut self) -> Self {
        self.node.set_visible(false);
        self
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: i32) -> Result<(), ShapeError> {
        self.font_size = positive("font size", font_size)?;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.color = color.into_color()?;
        Ok(())
    }

    pub fn key_colors(&self) -> &KeyColors {
        &self.key_colors
    }

    pub fn key_colors_mut(&mut self) -> &mut KeyColors {
        &mut self.key_colors
    }
}

impl Drawable for Text {
    impl_node_access!();

    fn render(&self, list: &mut DisplayList) {
        list.push(DrawCommand::Text {
            origin: self.node.position(),
            content: self.content.clone(),
            font_size: self.font_size as f32,
            color: self.color,
        });
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        if let Some(color) = self.key_colors.color_for(event) {
            tracing::trace!(key = %event.key, %color, "text recolored");
            self.color = color;
        }
    }
}
