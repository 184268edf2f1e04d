use sprig_core::{Buzzer, Circle, Container, Key, Rectangle, ShapeError, Text};

/// Overlapping shapes at the root plus two levels of nested containers.
pub fn demo_scene() -> Result<Container, ShapeError> {
    let mut root = Container::new();
    root.push(Circle::new((150, 150))?.with_radius(50)?.with_color("red")?);
    root.push(Circle::new((200, 200))?.with_radius(60)?.with_color("green")?);
    root.push(Text::new((180, 160))?.with_text("Overlap").with_color("white")?);

    let mut nested = Container::new();
    nested.push(Circle::new((400, 300))?.with_radius(40)?.with_color("blue")?);
    nested.push(
        Text::new((380, 280))?
            .with_text("Nested 1")
            .with_color("yellow")?
            .with_font_size(50)?,
    );

    let mut deeper = Container::new();
    deeper.push(
        Circle::new((500, 400))?
            .with_radius(30)?
            .with_color("purple")?
            .with_border(3, "white")?,
    );
    deeper.push(Text::new((480, 380))?.with_text("Nested 2").with_color("cyan")?);
    nested.push(deeper);
    root.push(nested);

    root.push(Rectangle::new((620, 60))?.with_size(120, 40)?.with_border(2, "gray")?);
    root.push(Buzzer::new((40, 480))?.with_trigger(Key::Digit(1)));
    root.push(
        Buzzer::new((120, 480))?
            .with_trigger(Key::Space)
            .with_colors("orange", "gray")?,
    );
    Ok(root)
}
