use ggez::input::keyboard::KeyCode;
use sprig_core::Key;

/// Translates a window key code into a scene key. Keys the scene has no name
/// for map to `None`.
pub fn key_from_keycode(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Key0 | KeyCode::Numpad0 => Key::Digit(0),
        KeyCode::Key1 | KeyCode::Numpad1 => Key::Digit(1),
        KeyCode::Key2 | KeyCode::Numpad2 => Key::Digit(2),
        KeyCode::Key3 | KeyCode::Numpad3 => Key::Digit(3),
        KeyCode::Key4 | KeyCode::Numpad4 => Key::Digit(4),
        KeyCode::Key5 | KeyCode::Numpad5 => Key::Digit(5),
        KeyCode::Key6 | KeyCode::Numpad6 => Key::Digit(6),
        KeyCode::Key7 | KeyCode::Numpad7 => Key::Digit(7),
        KeyCode::Key8 | KeyCode::Numpad8 => Key::Digit(8),
        KeyCode::Key9 | KeyCode::Numpad9 => Key::Digit(9),
        KeyCode::A => Key::Letter('a'),
        KeyCode::B => Key::Letter('b'),
        KeyCode::C => Key::Letter('c'),
        KeyCode::D => Key::Letter('d'),
        KeyCode::E => Key::Letter('e'),
        KeyCode::F => Key::Letter('f'),
        KeyCode::G => Key::Letter('g'),
        KeyCode::H => Key::Letter('h'),
        KeyCode::I => Key::Letter('i'),
        KeyCode::J => Key::Letter('j'),
        KeyCode::K => Key::Letter('k'),
        KeyCode::L => Key::Letter('l'),
        KeyCode::M => Key::Letter('m'),
        KeyCode::N => Key::Letter('n'),
        KeyCode::O => Key::Letter('o'),
        KeyCode::P => Key::Letter('p'),
        KeyCode::Q => Key::Letter('q'),
        KeyCode::R => Key::Letter('r'),
        KeyCode::S => Key::Letter('s'),
        KeyCode::T => Key::Letter('t'),
        KeyCode::U => Key::Letter('u'),
        KeyCode::V => Key::Letter('v'),
        KeyCode::W => Key::Letter('w'),
        KeyCode::X => Key::Letter('x'),
        KeyCode::Y => Key::Letter('y'),
        KeyCode::Z => Key::Letter('z'),
        KeyCode::Space => Key::Space,
        KeyCode::Return | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Back => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key)
}
