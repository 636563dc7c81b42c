//! Interactive two-vector visualizer.
//!
//! Draws two vectors from the centre of the window (first in red, second in
//! blue) and applies the selected vector operation to them, drawing any
//! resulting vectors in green and listing the numeric results on screen.

use clap::Parser;
use vecdraw::config::{Args, Config};
use vecdraw::operation::{self, Inputs, Operation, Outcome};
use vecdraw::render::Recorder;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::error::Error;
use std::time::Duration;

/// Window title displayed in the title bar
const TITLE: &str = "Vector operations";
/// Width of the window in pixels
const WINDOW_WIDTH: u32 = 520;
/// Height of the window in pixels
const WINDOW_HEIGHT: u32 = 520;
/// Path to the font file used for rendering text
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
/// Point size of the overlay text
const FONT_SIZE: u16 = 14;
/// Amount added or removed from the selected field per key press
const INPUT_STEP: f32 = 0.5;
/// Color of the input fields and the report
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
/// Color of the field the arrow keys currently edit
const SELECTED_COLOR: Color = Color::YELLOW;
/// Color of the failure message of the last cycle
const ERROR_COLOR: Color = Color::RGB(255, 96, 96);

/// Labels of the editable input fields, in Tab order
const FIELD_NAMES: [&str; 5] = ["v1x", "v1y", "v2x", "v2y", "scalar"];

/// Which button was pressed last.
#[derive(Clone, Copy, PartialEq)]
enum Cycle {
    Vectors,
    Operation,
}

/// Input fields and the last report, everything the window shows besides
/// the vectors themselves.
struct Form {
    inputs: Inputs,
    operation: Option<Operation>,
    field: usize,
    cycle: Cycle,
    report: Vec<String>,
    error: Option<String>,
}

impl Form {
    fn new(config: &Config) -> Form {
        Form {
            inputs: config.inputs,
            operation: config.operation,
            field: 0,
            cycle: Cycle::Vectors,
            report: Vec::new(),
            error: None,
        }
    }

    fn field_mut(&mut self) -> &mut f32 {
        match self.field {
            0 => &mut self.inputs.v1x,
            1 => &mut self.inputs.v1y,
            2 => &mut self.inputs.v2x,
            3 => &mut self.inputs.v2y,
            _ => &mut self.inputs.scalar,
        }
    }

    fn field_values(&self) -> [f32; 5] {
        let i = &self.inputs;
        [i.v1x, i.v1y, i.v2x, i.v2y, i.scalar]
    }

    /// Applies a key press. Returns true when the window needs redrawing.
    fn handle_key(&mut self, key: Keycode, keymod: Mod) -> bool {
        let shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
        match key {
            Keycode::Tab if shift => {
                self.field = (self.field + FIELD_NAMES.len() - 1) % FIELD_NAMES.len();
            }
            Keycode::Tab => self.field = (self.field + 1) % FIELD_NAMES.len(),
            Keycode::Up => *self.field_mut() += INPUT_STEP,
            Keycode::Down => *self.field_mut() -= INPUT_STEP,
            Keycode::O => {
                self.operation = Some(self.operation.map_or(Operation::Add, Operation::next));
            }
            Keycode::P => {
                self.operation = Some(self.operation.map_or(Operation::Area, Operation::prev));
            }
            Keycode::Space => self.cycle = Cycle::Vectors,
            Keycode::Return | Keycode::KpEnter => self.cycle = Cycle::Operation,
            _ => return false,
        }
        true
    }
}

/// Runs one complete draw cycle for the last pressed button and stores the
/// report for the text overlay.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas for rendering
/// * `form` - Current input fields
fn redraw(canvas: &mut Canvas<Window>, form: &mut Form) {
    form.report.clear();
    form.error = None;
    match form.cycle {
        Cycle::Vectors => operation::draw_vectors(canvas, &form.inputs),
        Cycle::Operation => match operation::draw_operation(canvas, &form.inputs, form.operation) {
            Ok(Outcome::Nothing) => form.error = Some("No valid operation selected".to_string()),
            Ok(outcome) => form.report = outcome.lines(),
            Err(e) => form.error = Some(e.to_string()),
        },
    }
}

/// Renders one line of text with its top left corner at (x, y).
fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    color: Color,
    x: i32,
    y: i32,
) -> Result<(), String> {
    if text.is_empty() {
        return Ok(());
    }
    let text_surface = font.render(text).blended(color).map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let text_texture = texture_creator
        .create_texture_from_surface(&text_surface)
        .map_err(|e| e.to_string())?;
    let texture_query = text_texture.query();
    let target_rect = Rect::new(x, y, texture_query.width, texture_query.height);
    canvas.copy(&text_texture, None, Some(target_rect))
}

/// Draws the input fields, the selected operation and the last report.
///
/// # Arguments
///
/// * `canvas` - SDL2 canvas for rendering
/// * `font` - Font for rendering text
/// * `form` - Fields and report to show
fn draw_overlay(canvas: &mut Canvas<Window>, font: &Font, form: &Form) -> Result<(), String> {
    let line_height = font.recommended_line_spacing();
    let mut x = 8;
    for (idx, (name, value)) in FIELD_NAMES.iter().zip(form.field_values()).enumerate() {
        let color = if idx == form.field { SELECTED_COLOR } else { TEXT_COLOR };
        let text = format!("{name}: {value}");
        draw_text(canvas, font, &text, color, x, 8)?;
        x += WINDOW_WIDTH as i32 / FIELD_NAMES.len() as i32;
    }
    let op = form.operation.map_or("none", Operation::tag);
    draw_text(canvas, font, &format!("operation: {op}"), TEXT_COLOR, 8, 8 + line_height)?;

    let mut y = WINDOW_HEIGHT as i32 - 8 - line_height;
    if let Some(error) = &form.error {
        draw_text(canvas, font, error, ERROR_COLOR, 8, y)?;
        y -= line_height;
    }
    for line in form.report.iter().rev() {
        draw_text(canvas, font, line, TEXT_COLOR, 8, y)?;
        y -= line_height;
    }
    Ok(())
}

/// Runs a single operation cycle against an off-screen surface and prints
/// the report.
fn run_headless(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut surface = Recorder::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let outcome = operation::draw_operation(&mut surface, &config.inputs, config.operation)?;
    for line in outcome.lines() {
        println!("{line}");
    }
    log::debug!("{} draw calls", surface.commands.len());
    Ok(())
}

/// Main entry point for the visualizer.
///
/// Parses the command line, then either runs one headless cycle or opens the
/// window and redraws whenever a key changes the form.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    if config.headless {
        return run_headless(&config);
    }

    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init()?;

    let window = video_subsystem.window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()?;
    let font = match ttf_context.load_font(FONT_PATH, FONT_SIZE) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("Could not load font {}: {}, text overlay disabled", FONT_PATH, e);
            None
        }
    };

    let mut canvas = window.into_canvas().build()?;
    let mut form = Form::new(&config);
    let mut dirty = true;
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit {..} |
                Event::KeyDown { keycode: Some(Keycode::Escape), ..} => {
                    break 'running
                },
                Event::KeyDown { keycode: Some(key), keymod, .. } => {
                    dirty |= form.handle_key(key, keymod);
                },
                _ => {}
            }
        }

        if dirty {
            dirty = false;
            redraw(&mut canvas, &mut form);
            if let Some(font) = &font {
                if let Err(e) = draw_overlay(&mut canvas, font, &form) {
                    log::warn!("Failed to draw text: {}", e);
                }
            }
            canvas.present();
        }
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}
