//! One compute-then-render cycle per host event.

use crate::error::{ParseOperationError, VectorError};
use crate::library::*;
use crate::render::{self, Surface, BACKGROUND, FIRST_COLOR, RESULT_COLOR, SECOND_COLOR};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Angle,
    Magnitude,
    Normalize,
    Area,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Angle,
        Operation::Magnitude,
        Operation::Normalize,
        Operation::Area,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Angle => "angle",
            Operation::Magnitude => "magnitude",
            Operation::Normalize => "normalize",
            Operation::Area => "area",
        }
    }

    fn index(self) -> usize {
        Operation::ALL.iter().position(|op| *op == self).unwrap_or(0)
    }

    pub fn next(self) -> Operation {
        Operation::ALL[(self.index() + 1) % Operation::ALL.len()]
    }

    pub fn prev(self) -> Operation {
        let len = Operation::ALL.len();
        Operation::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Operation, ParseOperationError> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.tag() == s)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Already-parsed values of the input fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub v1x: f32,
    pub v1y: f32,
    pub v2x: f32,
    pub v2y: f32,
    pub scalar: f32,
}

impl Default for Inputs {
    fn default() -> Inputs {
        Inputs {
            v1x: 1.0,
            v1y: 1.0,
            v2x: 2.0,
            v2y: 1.0,
            scalar: 1.0,
        }
    }
}

impl Inputs {
    pub fn vectors(&self) -> (Vector3, Vector3) {
        (
            Vector3::planar(self.v1x, self.v1y),
            Vector3::planar(self.v2x, self.v2y),
        )
    }
}

/// What an operation produced, for the host to report.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Labelled vectors, each of which was drawn.
    Vectors(Vec<(String, Vector3)>),
    Magnitudes(f32, f32),
    Angle(f32),
    Area(f32),
    Nothing,
}

fn format_vector(v: Vector3) -> String {
    format!("[{}, {}, {}]", v.x, v.y, v.z)
}

impl Outcome {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Vectors(vectors) => vectors
                .iter()
                .map(|(label, v)| format!("{} = {}", label, format_vector(*v)))
                .collect(),
            Outcome::Magnitudes(m1, m2) => vec![
                format!("Magnitude v1: {:.3}", m1),
                format!("Magnitude v2: {:.3}", m2),
            ],
            Outcome::Angle(deg) => vec![format!("Angle: {:.3}", deg)],
            Outcome::Area(area) => vec![format!("Area of triangle: {:.3}", area)],
            Outcome::Nothing => Vec::new(),
        }
    }
}

/// Clear the surface and draw both input vectors.
pub fn draw_vectors<S: Surface + ?Sized>(surface: &mut S, inputs: &Inputs) {
    let (v1, v2) = inputs.vectors();
    render::clear(surface, BACKGROUND);
    render::draw_vector(surface, v1, FIRST_COLOR);
    render::draw_vector(surface, v2, SECOND_COLOR);
}

fn compute(op: Operation, v1: Vector3, v2: Vector3, k: f32) -> Result<Outcome, VectorError> {
    let outcome = match op {
        Operation::Add => Outcome::Vectors(vec![("v1 + v2".to_string(), add(v1, v2))]),
        Operation::Sub => Outcome::Vectors(vec![("v1 - v2".to_string(), sub(v1, v2))]),
        Operation::Mul => Outcome::Vectors(vec![
            (format!("v1 * {}", k), scale(v1, k)),
            (format!("v2 * {}", k), scale(v2, k)),
        ]),
        Operation::Div => Outcome::Vectors(vec![
            (format!("v1 / {}", k), divide(v1, k)?),
            (format!("v2 / {}", k), divide(v2, k)?),
        ]),
        Operation::Angle => Outcome::Angle(angle_degrees(v1, v2)),
        Operation::Magnitude => Outcome::Magnitudes(get_magnitude(v1), get_magnitude(v2)),
        Operation::Normalize => Outcome::Vectors(vec![
            ("norm(v1)".to_string(), normalize(v1)),
            ("norm(v2)".to_string(), normalize(v2)),
        ]),
        Operation::Area => Outcome::Area(triangle_area(v1, v2)),
    };
    Ok(outcome)
}

/// Redraw both inputs, then apply `op` and draw its resulting vectors.
///
/// Results are computed in full before any of them is drawn, so a failing
/// operation leaves exactly the two input vectors on the surface. `None`
/// stands for an unrecognised selection and only redraws the inputs.
pub fn draw_operation<S: Surface + ?Sized>(
    surface: &mut S,
    inputs: &Inputs,
    op: Option<Operation>,
) -> Result<Outcome, VectorError> {
    draw_vectors(surface, inputs);

    let op = match op {
        Some(op) => op,
        None => {
            log::warn!("No valid operation selected");
            return Ok(Outcome::Nothing);
        }
    };

    let (v1, v2) = inputs.vectors();
    let outcome = match compute(op, v1, v2, inputs.scalar) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("{}: {}", op, e);
            return Err(e);
        }
    };

    if let Outcome::Vectors(vectors) = &outcome {
        for (_, v) in vectors {
            render::draw_vector(surface, *v, RESULT_COLOR);
        }
    }
    for line in outcome.lines() {
        log::info!("{}", line);
    }
    Ok(outcome)
}
