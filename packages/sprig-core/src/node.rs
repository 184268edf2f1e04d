use crate::error::ShapeError;
use crate::key::KeyEvent;
use crate::scene::DisplayList;
use glam::Vec2;
use std::any::Any;
use std::fmt::Debug;

/// Anything a position setter accepts. Every form is checked for finite
/// components.
pub trait IntoPosition {
    fn into_position(self) -> Result<Vec2, ShapeError>;
}

fn finite(v: Vec2) -> Result<Vec2, ShapeError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ShapeError::InvalidPosition { x: v.x, y: v.y })
    }
}

impl IntoPosition for Vec2 {
    fn into_position(self) -> Result<Vec2, ShapeError> {
        finite(self)
    }
}

impl IntoPosition for (f32, f32) {
    fn into_position(self) -> Result<Vec2, ShapeError> {
        finite(Vec2::new(self.0, self.1))
    }
}

impl IntoPosition for [f32; 2] {
    fn into_position(self) -> Result<Vec2, ShapeError> {
        finite(Vec2::from_array(self))
    }
}

/// Pixel coordinates. Components beyond `±2^24` are rounded to the nearest
/// representable `f32`.
impl IntoPosition for (i32, i32) {
    fn into_position(self) -> Result<Vec2, ShapeError> {
        let (x, y) = (f64::from(self.0), f64::from(self.1));
        finite(Vec2::new(x as f32, y as f32))
    }
}

/// Position and visibility shared by every drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    position: Vec2,
    visible: bool,
}

impl Node {
    pub fn new(position: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            position: position.into_position()?,
            visible: true,
        })
    }

    /// Visible node at an already validated position.
    pub(crate) fn at(position: Vec2) -> Self {
        Self {
            position,
            visible: true,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: impl IntoPosition) -> Result<(), ShapeError> {
        self.position = position.into_position()?;
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            visible: true,
        }
    }
}

/// The capability every scene member provides: draw into a display list and
/// react to keys.
pub trait Drawable: Debug + Any {
    fn node(&self) -> &Node;

    fn node_mut(&mut self) -> &mut Node;

    /// Emits this drawable's commands. Only called while visible.
    fn render(&self, list: &mut DisplayList);

    /// Unrecognized keys are ignored. Runs whether or not the drawable is
    /// visible.
    fn handle_key_event(&mut self, event: &KeyEvent);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn draw(&self, list: &mut DisplayList) {
        if self.is_visible() {
            self.render(list);
        }
    }

    fn position(&self) -> Vec2 {
        self.node().position()
    }

    fn set_position(&mut self, position: Vec2) -> Result<(), ShapeError> {
        self.node_mut().set_position(position)
    }

    fn is_visible(&self) -> bool {
        self.node().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.node_mut().set_visible(visible);
    }

    /// Flips this drawable's own flag through [`Drawable::set_visible`].
    fn toggle_visibility(&mut self) {
        let visible = !self.is_visible();
        self.set_visible(visible);
    }
}

macro_rules! impl_node_access {
    () => {
        fn node(&self) -> &$crate::node::Node {
            &self.node
        }

        fn node_mut(&mut self) -> &mut $crate::node::Node {
            &mut self.node
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub(crate) use impl_node_access;
