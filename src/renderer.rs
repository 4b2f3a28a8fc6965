use image::RgbaImage;
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Points},
};

use crate::config::ScreenBounds;
use crate::surface::{CommandList, DrawCommand};
use crate::vector::Vec2;
use glam::Affine2;

#[derive(Debug, Clone, Copy)]
struct PaintState {
    transform: Affine2,
    fill: Color,
}

/// Same-coloured canvas points, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    pub color: Color,
    pub coords: Vec<(f64, f64)>,
}

/// Rasterises recorded draw commands onto a grid of sample points.
pub struct Painter {
    bounds: ScreenBounds,
    /// Canvas resolution in pixels
    columns: u32,
    rows: u32,
    state: PaintState,
    stack: Vec<PaintState>,
    batches: Vec<PointBatch>,
}

impl Painter {
    pub fn new(bounds: ScreenBounds, columns: u32, rows: u32) -> Self {
        Self {
            bounds,
            columns,
            rows,
            state: PaintState {
                transform: Affine2::IDENTITY,
                fill: Color::Black,
            },
            stack: Vec::new(),
            batches: Vec::new(),
        }
    }

    /// Replays `commands` and returns the painted points in paint order.
    pub fn rasterize(mut self, commands: &[DrawCommand]) -> Vec<PointBatch> {
        for command in commands {
            self.apply(command);
        }
        self.batches
    }

    fn apply(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Save => self.stack.push(self.state),
            DrawCommand::Restore => {
                if let Some(state) = self.stack.pop() {
                    self.state = state;
                }
            }
            DrawCommand::Translate(offset) => {
                self.state.transform = self.state.transform * Affine2::from_translation(*offset);
            }
            DrawCommand::Rotate(angle) => {
                self.state.transform = self.state.transform * Affine2::from_angle(*angle);
            }
            DrawCommand::SetFill(color) => self.state.fill = *color,
            DrawCommand::FillRect { origin, size } => {
                let (origin, size) = (*origin, *size);
                let corners = [
                    origin,
                    origin + Vec2::new(size.x, 0.0),
                    origin + Vec2::new(0.0, size.y),
                    origin + size,
                ];
                let fill = self.state.fill;
                self.fill_region(&corners, |local| {
                    let inside = local.x >= origin.x.min(origin.x + size.x)
                        && local.x <= origin.x.max(origin.x + size.x)
                        && local.y >= origin.y.min(origin.y + size.y)
                        && local.y <= origin.y.max(origin.y + size.y);
                    inside.then_some(fill)
                });
            }
            DrawCommand::FillCircle { center, radius } => {
                let (center, radius) = (*center, *radius);
                let corners = [
                    center + Vec2::new(-radius, -radius),
                    center + Vec2::new(radius, -radius),
                    center + Vec2::new(-radius, radius),
                    center + Vec2::new(radius, radius),
                ];
                let fill = self.state.fill;
                self.fill_region(&corners, |local| {
                    ((local - center).length() <= radius).then_some(fill)
                });
            }
            DrawCommand::DrawImage { center, image } => {
                let size = Vec2::new(image.width() as f32, image.height() as f32);
                let origin = *center - size * 0.5;
                let corners = [
                    origin,
                    origin + Vec2::new(size.x, 0.0),
                    origin + Vec2::new(0.0, size.y),
                    origin + size,
                ];
                self.fill_region(&corners, |local| image_pixel(image, local - origin));
            }
        }
    }

    /// Samples every canvas pixel inside the transformed `corners` hull and
    /// paints it with whatever `shade` returns for the local position.
    fn fill_region(&mut self, corners: &[Vec2; 4], shade: impl Fn(Vec2) -> Option<Color>) {
        let transform = self.state.transform;
        let inverse = transform.inverse();
        if !inverse.is_finite() || self.columns == 0 || self.rows == 0 {
            return;
        }

        let world: Vec<Vec2> = corners
            .iter()
            .map(|c| transform.transform_point2(*c))
            .collect();
        let min_x = world.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = world.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = world.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = world.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        let step_x = self.bounds.width() / self.columns as f32;
        let step_y = self.bounds.height() / self.rows as f32;
        let (first_col, last_col) = cell_range(min_x, max_x, step_x, self.columns);
        let (first_row, last_row) = cell_range(min_y, max_y, step_y, self.rows);

        for row in first_row..last_row {
            for col in first_col..last_col {
                let sample = Vec2::new((col as f32 + 0.5) * step_x, (row as f32 + 0.5) * step_y);
                if let Some(color) = shade(inverse.transform_point2(sample)) {
                    self.plot(color, sample);
                }
            }
        }
    }

    fn plot(&mut self, color: Color, world: Vec2) {
        // Canvas y grows upward
        let point = (
            f64::from(world.x),
            f64::from(self.bounds.height() - world.y),
        );
        match self.batches.last_mut() {
            Some(batch) if batch.color == color => batch.coords.push(point),
            _ => self.batches.push(PointBatch {
                color,
                coords: vec![point],
            }),
        }
    }
}

/// Pixel index range whose centres may fall inside `[min, max]`.
fn cell_range(min: f32, max: f32, step: f32, count: u32) -> (u32, u32) {
    if !(min.is_finite() && max.is_finite()) || max < 0.0 {
        return (0, 0);
    }
    let first = (min / step - 0.5).floor().max(0.0) as u32;
    let last = ((max / step + 0.5).ceil().max(0.0) as u32).min(count);
    (first.min(count), last)
}

fn image_pixel(image: &RgbaImage, offset: Vec2) -> Option<Color> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (x, y) = (offset.x as u32, offset.y as u32);
    if x >= image.width() || y >= image.height() {
        return None;
    }
    let [r, g, b, a] = image.get_pixel(x, y).0;
    (a > 0).then_some(Color::Rgb(r, g, b))
}

/// View struct that holds everything needed to put one frame on screen
pub struct RenderView<'a> {
    pub commands: &'a CommandList,
    pub bounds: ScreenBounds,
    pub area: Rect,
}

/// Draws recorded frames onto a ratatui canvas
#[derive(Default)]
pub struct GameRenderer {}

impl GameRenderer {
    /// Creates a new GameRenderer
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        // Half-block markers give two square-ish pixels per cell
        let batches = Painter::new(view.bounds, u32::from(area.width), u32::from(area.height) * 2)
            .rasterize(view.commands.commands());

        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, f64::from(view.bounds.width())])
            .y_bounds([0.0, f64::from(view.bounds.height())])
            .paint(|ctx| {
                for batch in &batches {
                    ctx.draw(&Points {
                        coords: &batch.coords,
                        color: batch.color,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }
}
