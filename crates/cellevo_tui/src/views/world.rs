use cellevo_core::PopulationSnapshot;
use cellevo_data::{Point, Rgb, Shape};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line, Rectangle};
use ratatui::widgets::{Block, Borders, Widget};

const FOOD_COLOR: Color = Color::Green;

/// Canvas view of cells and food.
///
/// Canvas coordinates grow upward, so every y is flipped against the canvas height.
pub struct WorldWidget<'a> {
    snapshot: &'a PopulationSnapshot,
}

impl<'a> WorldWidget<'a> {
    pub fn new(snapshot: &'a PopulationSnapshot) -> Self {
        Self { snapshot }
    }

    fn flip(&self, p: Point) -> (f64, f64) {
        (p.x, f64::from(self.snapshot.height) - p.y)
    }

    fn draw_shape(&self, ctx: &mut Context<'_>, shape: &Shape, color: Color) {
        match shape {
            Shape::Circle { center, radius } => {
                let (x, y) = self.flip(*center);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: *radius,
                    color,
                });
            }
            Shape::Square { center, side } => {
                let (x, y) = self.flip(*center);
                ctx.draw(&Rectangle {
                    x: x - side / 2.0,
                    y: y - side / 2.0,
                    width: *side,
                    height: *side,
                    color,
                });
            }
            Shape::Polygon { vertices } => {
                let edges = vertices.iter().zip(vertices.iter().cycle().skip(1));
                for (a, b) in edges {
                    let (x1, y1) = self.flip(*a);
                    let (x2, y2) = self.flip(*b);
                    ctx.draw(&Line::new(x1, y1, x2, y2, color));
                }
            }
        }
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl<'a> Widget for WorldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;
        Canvas::default()
            .block(
                Block::default()
                    .title(format!(
                        "Generation {} (Tick: {})",
                        snapshot.generation, snapshot.tick
                    ))
                    .borders(Borders::ALL),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(snapshot.width)])
            .y_bounds([0.0, f64::from(snapshot.height)])
            .paint(|ctx| {
                for food in &snapshot.food {
                    let (x, y) = self.flip(food.position);
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: f64::from(food.size) / 2.0,
                        color: FOOD_COLOR,
                    });
                }
                ctx.layer();
                for cell in &snapshot.cells {
                    self.draw_shape(ctx, &cell.shape, rgb(cell.color));
                }
            })
            .render(area, buf);
    }
}
