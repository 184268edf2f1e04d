use crate::color::{Color, IntoColor};
use crate::error::{ShapeError, non_negative};
use crate::key::{Key, KeyEvent, KeyState};
use crate::node::{Drawable, IntoPosition, Node, impl_node_access};
use crate::scene::{DisplayList, DrawCommand};
use glam::Vec2;

use super::Rectangle;

/// Square frame with an inset circle that lights up while the trigger key is
/// held down.
///
/// The frame and circle are rebuilt from the current fields on every draw;
/// the circle is concentric with the frame and its radius is half the width
/// minus `margin`, never below zero.
#[derive(Debug, Clone)]
pub struct Buzzer {
    node: Node,
    size: (u32, u32),
    inner_color: Color,
    active_color: Color,
    idle_color: Color,
    frame_color: Color,
    trigger: Key,
    margin: u32,
}

impl Buzzer {
    pub const DEFAULT_MARGIN: u32 = 5;

    pub fn new(top_left: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            node: Node::new(top_left)?,
            size: (50, 50),
            inner_color: Color::GREEN,
            active_color: Color::RED,
            idle_color: Color::GREEN,
            frame_color: Color::GRAY,
            trigger: Key::Digit(1),
            margin: Self::DEFAULT_MARGIN,
        })
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Result<Self, ShapeError> {
        self.set_size(width, height)?;
        Ok(self)
    }

    pub fn with_trigger(mut self, trigger: Key) -> Self {
        self.trigger = trigger;
        self
    }

    /// Sets the pressed and released colors; the inner circle starts idle.
    pub fn with_colors(
        mut self,
        active: impl IntoColor,
        idle: impl IntoColor,
    ) -> Result<Self, ShapeError> {
        let active = active.into_color()?;
        let idle = idle.into_color()?;
        self.active_color = active;
        self.idle_color = idle;
        self.inner_color = idle;
        Ok(self)
    }

    pub fn with_frame_color(mut self, color: impl IntoColor) -> Result<Self, ShapeError> {
        self.set_frame_color(color)?;
        Ok(self)
    }

    pub fn with_margin(mut self, margin: i32) -> Result<Self, ShapeError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> Result<(), ShapeError> {
        let width = non_negative("width", width)?;
        let height = non_negative("height", height)?;
        self.size = (width, height);
        Ok(())
    }

    /// Color currently filling the inner circle.
    pub fn inner_color(&self) -> Color {
        self.inner_color
    }

    pub fn set_inner_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.inner_color = color.into_color()?;
        Ok(())
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.active_color = color.into_color()?;
        Ok(())
    }

    pub fn idle_color(&self) -> Color {
        self.idle_color
    }

    pub fn set_idle_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.idle_color = color.into_color()?;
        Ok(())
    }

    pub fn frame_color(&self) -> Color {
        self.frame_color
    }

    pub fn set_frame_color(&mut self, color: impl IntoColor) -> Result<(), ShapeError> {
        self.frame_color = color.into_color()?;
        Ok(())
    }

    pub fn trigger(&self) -> Key {
        self.trigger
    }

    pub fn set_trigger(&mut self, trigger: Key) {
        self.trigger = trigger;
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: i32) -> Result<(), ShapeError> {
        self.margin = non_negative("margin", margin)?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.inner_color == self.active_color
    }

    fn frame(&self) -> Rectangle {
        Rectangle::derived(self.node.position(), self.size, self.frame_color)
    }

    fn light(&self) -> DrawCommand {
        let size = Vec2::new(self.size.0 as f32, self.size.1 as f32);
        DrawCommand::FillCircle {
            center: self.node.position() + size / 2.0,
            radius: (size.x / 2.0 - self.margin as f32).max(0.0),
            color: self.inner_color,
        }
    }
}

impl Drawable for Buzzer {
    impl_node_access!();

    fn render(&self, list: &mut DisplayList) {
        self.frame().render(list);
        list.push(self.light());
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        if event.key != self.trigger {
            return;
        }
        self.inner_color = match event.state {
            KeyState::Pressed => self.active_color,
            KeyState::Released => self.idle_color,
        };
        tracing::trace!(key = %event.key, state = ?event.state, "buzzer switched");
    }
}
