use crate::library::Vector3;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};

/// Pixels per vector unit.
pub const SCALE: f32 = 20.0;
/// Stroke width of a drawn vector in pixels.
pub const LINE_WIDTH: u8 = 2;

pub const BACKGROUND: Color = Color::BLACK;
pub const FIRST_COLOR: Color = Color::RED;
pub const SECOND_COLOR: Color = Color::BLUE;
pub const RESULT_COLOR: Color = Color::GREEN;

/// Something vectors can be drawn on. Handed explicitly to every draw call.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Paint the whole surface with one color.
    fn fill(&mut self, color: Color);

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color);
}

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

impl<T: RenderTarget> Surface for Canvas<T> {
    fn size(&self) -> (u32, u32) {
        let viewport = self.viewport();
        (viewport.width(), viewport.height())
    }

    fn fill(&mut self, color: Color) {
        self.set_draw_color(color);
        self.clear();
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color) {
        // gfx takes i16 coordinates, keep the end on screen so the cast can't bend the line
        let to = clip_segment(Surface::size(self), from, to);
        let x1 = from[0] as i16;
        let y1 = from[1] as i16;
        let x2 = to[0] as i16;
        let y2 = to[1] as i16;
        if let Err(e) = self.thick_line(x1, y1, x2, y2, LINE_WIDTH, to_abgr(color)) {
            log::warn!("Failed to draw line: {}", e);
        }
    }
}

/// A single call made against a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Fill(Color),
    Line { from: [f32; 2], to: [f32; 2], color: Color },
}

/// Headless surface that keeps every draw call instead of rasterizing it.
#[derive(Debug, Clone)]
pub struct Recorder {
    width: u32,
    height: u32,
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Recorder {
        Recorder {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Lines drawn since the last fill.
    pub fn visible_lines(&self) -> Vec<Command> {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, Command::Fill(_)))
            .map_or(0, |i| i + 1);
        self.commands[start..].to_vec()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(Command::Fill(color));
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color) {
        self.commands.push(Command::Line { from, to, color });
    }
}

/// Centre of a surface of the given size.
pub fn center(size: (u32, u32)) -> [f32; 2] {
    [size.0 as f32 / 2.0, size.1 as f32 / 2.0]
}

/// Screen position of the tip of `v`. Screen y grows downwards so the
/// y component is flipped.
pub fn endpoint(size: (u32, u32), v: Vector3) -> [f32; 2] {
    let [cx, cy] = center(size);
    [cx + v.x * SCALE, cy - v.y * SCALE]
}

/// End of the part of the segment `from`..`to` that lies on a surface of the
/// given size. `from` must be on the surface. The direction is unchanged.
pub fn clip_segment(size: (u32, u32), from: [f32; 2], to: [f32; 2]) -> [f32; 2] {
    let limits = [size.0 as f32, size.1 as f32];
    let mut t = 1.0f32;
    for axis in 0..2 {
        let d = to[axis] - from[axis];
        if to[axis] > limits[axis] {
            t = t.min((limits[axis] - from[axis]) / d);
        } else if to[axis] < 0.0 {
            t = t.min(-from[axis] / d);
        }
    }
    let clipped = [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
    ];
    if clipped.iter().all(|c| c.is_finite()) {
        clipped
    } else {
        from
    }
}

/// Wipe everything previously drawn.
pub fn clear<S: Surface + ?Sized>(surface: &mut S, color: Color) {
    surface.fill(color);
}

/// Draw `v` as a segment starting at the centre of the surface.
pub fn draw_vector<S: Surface + ?Sized>(surface: &mut S, v: Vector3, color: Color) {
    let size = surface.size();
    surface.line(center(size), endpoint(size, v), color);
}
