use sprig_core::{Color, Key, KeyColors, ShapeError};

#[test]
fn test_color_names_and_hex() {
    assert_eq!("red".parse::<Color>().unwrap(), Color::RED);
    assert_eq!("Grey".parse::<Color>().unwrap(), Color::GRAY);
    assert_eq!("#1e1e1e".parse::<Color>().unwrap(), Color::rgb(30, 30, 30));
    assert_eq!("ff000080".parse::<Color>().unwrap(), Color::rgba(255, 0, 0, 128));

    for bad in ["", "#12345", "#gggggg", "+fffff", "reddish", "#1234567"] {
        assert_eq!(
            bad.parse::<Color>(),
            Err(ShapeError::InvalidColor(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_color_display_and_serde() {
    assert_eq!(Color::rgb(30, 30, 30).to_string(), "#1e1e1e");
    assert_eq!(Color::rgba(0, 0, 255, 16).to_string(), "#0000ff10");

    let json = serde_json::to_string(&Color::PURPLE).unwrap();
    assert_eq!(json, "\"#a020f0\"");
    assert_eq!(serde_json::from_str::<Color>("\"cyan\"").unwrap(), Color::CYAN);
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}

#[test]
fn test_key_names() {
    assert_eq!("1".parse::<Key>().unwrap(), Key::Digit(1));
    assert_eq!("A".parse::<Key>().unwrap(), Key::Letter('a'));
    assert_eq!("return".parse::<Key>().unwrap(), Key::Enter);
    assert_eq!("Space".parse::<Key>().unwrap(), Key::Space);
    assert!(matches!(
        "f13".parse::<Key>(),
        Err(ShapeError::UnknownKey(name)) if name == "f13"
    ));

    assert_eq!(Key::Letter('q').to_string(), "q");
    assert_eq!(Key::digit(10), None);
    assert_eq!(Key::letter('Z'), Some(Key::Letter('z')));
    assert_eq!(Key::letter('!'), None);
}

#[test]
fn test_key_colors_table() {
    let mut table = KeyColors::default();
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup(Key::Digit(1)), Some(Color::RED));
    assert_eq!(table.lookup(Key::Digit(2)), Some(Color::GREEN));
    assert_eq!(table.lookup(Key::Digit(3)), Some(Color::BLUE));
    assert_eq!(table.lookup(Key::Digit(4)), None);

    table.bind(Key::Digit(1), Color::ORANGE);
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup(Key::Digit(1)), Some(Color::ORANGE));

    assert_eq!(table.unbind(Key::Digit(2)), Some(Color::GREEN));
    assert_eq!(table.unbind(Key::Digit(2)), None);
    assert_eq!(
        table.iter().map(|(key, _)| key).collect::<Vec<_>>(),
        vec![Key::Digit(1), Key::Digit(3)]
    );
    assert!(KeyColors::empty().is_empty());
}
