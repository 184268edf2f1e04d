use crate::color::Color;
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::fmt;
use std::str::FromStr;

/// Keyboard key, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// `0` through `9`.
    Digit(u8),
    /// Lowercase `a` through `z`.
    Letter(char),
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn digit(n: u8) -> Option<Self> {
        (n <= 9).then_some(Key::Digit(n))
    }

    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Key::Letter(c.to_ascii_lowercase()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(n) => write!(f, "{}", n),
            Key::Letter(c) => write!(f, "{}", c),
            Key::Space => f.write_str("space"),
            Key::Enter => f.write_str("enter"),
            Key::Escape => f.write_str("escape"),
            Key::Tab => f.write_str("tab"),
            Key::Backspace => f.write_str("backspace"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Key {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(n) = c.to_digit(10) {
                return Ok(Key::Digit(n as u8));
            }
            if let Some(key) = Key::letter(c) {
                return Ok(key);
            }
        }
        match name.as_str() {
            "space" => Ok(Key::Space),
            "enter" | "return" => Ok(Key::Enter),
            "escape" | "esc" => Ok(Key::Escape),
            "tab" => Ok(Key::Tab),
            "backspace" => Ok(Key::Backspace),
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            _ => Err(ShapeError::UnknownKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A key going down or coming back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}

/// Ordered key to color bindings used by the plain shapes.
///
/// The default table maps `1`, `2` and `3` to red, green and blue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyColors {
    bindings: SmallVec<[(Key, Color); 4]>,
}

impl KeyColors {
    pub fn empty() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    pub fn lookup(&self, key: Key) -> Option<Color> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, color)| *color)
    }

    /// Binds `key` to `color`, replacing an existing binding for the key.
    pub fn bind(&mut self, key: Key, color: Color) {
        match self.bindings.iter_mut().find(|(k, _)| *k == key) {
            Some(binding) => binding.1 = color,
            None => self.bindings.push((key, color)),
        }
    }

    pub fn unbind(&mut self, key: Key) -> Option<Color> {
        let index = self.bindings.iter().position(|(k, _)| *k == key)?;
        Some(self.bindings.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Key, Color)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Color a key press selects, if the event is a press of a bound key.
    pub(crate) fn color_for(&self, event: &KeyEvent) -> Option<Color> {
        if event.is_pressed() {
            self.lookup(event.key)
        } else {
            None
        }
    }
}

impl Default for KeyColors {
    fn default() -> Self {
        Self {
            bindings: smallvec![
                (Key::Digit(1), Color::RED),
                (Key::Digit(2), Color::GREEN),
                (Key::Digit(3), Color::BLUE),
            ],
        }
    }
}
