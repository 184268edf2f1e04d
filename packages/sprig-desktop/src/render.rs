use ggez::graphics::{self, Canvas, DrawMode, DrawParam, Mesh};
use ggez::{Context, GameResult};
use sprig_core::{Color, DisplayList, DrawCommand, Rect};

const CIRCLE_TOLERANCE: f32 = 0.1;

pub fn to_ggez_color(color: Color) -> graphics::Color {
    graphics::Color::from_rgba(color.r, color.g, color.b, color.a)
}

fn to_ggez_rect(rect: &Rect) -> graphics::Rect {
    graphics::Rect::new(rect.x, rect.y, rect.width, rect.height)
}

fn is_degenerate(rect: &Rect) -> bool {
    rect.width <= 0.0 || rect.height <= 0.0
}

/// Paints a display list onto the frame canvas, in list order.
///
/// Zero-area circles and rectangles are skipped since they would produce
/// empty meshes.
pub fn rasterize(ctx: &mut Context, canvas: &mut Canvas, list: &DisplayList) -> GameResult {
    for command in list {
        match command {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                if *radius <= 0.0 {
                    continue;
                }
                let mesh = Mesh::new_circle(
                    ctx,
                    DrawMode::fill(),
                    [center.x, center.y],
                    *radius,
                    CIRCLE_TOLERANCE,
                    to_ggez_color(*color),
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => {
                if *radius <= 0.0 {
                    continue;
                }
                let mesh = Mesh::new_circle(
                    ctx,
                    DrawMode::stroke(*width),
                    [center.x, center.y],
                    *radius,
                    CIRCLE_TOLERANCE,
                    to_ggez_color(*color),
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::FillRect { rect, color } => {
                if is_degenerate(rect) {
                    continue;
                }
                let mesh = Mesh::new_rectangle(
                    ctx,
                    DrawMode::fill(),
                    to_ggez_rect(rect),
                    to_ggez_color(*color),
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::StrokeRect { rect, width, color } => {
                if is_degenerate(rect) {
                    continue;
                }
                let mesh = Mesh::new_rectangle(
                    ctx,
                    DrawMode::stroke(*width),
                    to_ggez_rect(rect),
                    to_ggez_color(*color),
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::Text {
                origin,
                content,
                font_size,
                color,
            } => {
                let mut text = graphics::Text::new(content.as_str());
                text.set_scale(*font_size);
                canvas.draw(
                    &text,
                    DrawParam::default()
                        .dest([origin.x, origin.y])
                        .color(to_ggez_color(*color)),
                );
            }
        }
    }
    Ok(())
}
