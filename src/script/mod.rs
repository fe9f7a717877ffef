//! Line-oriented command scripts.
//!
//! Each command is a keyword on its own line followed by one line of
//! whitespace-separated numbers.
//!
//! # Syntax
//!
//! ```text
//! line        x0 y0 x1 y1 [r g b]
//! circle      cx cy radius [r g b]
//! bezier      x0 y0 x1 y1 x2 y2 x3 y3 [r g b]
//! hermite     x0 y0 x1 y1 rx0 ry0 rx1 ry1 [r g b]
//! edge        x0 y0 x1 y1
//! point       x y
//! rotate      degrees
//! scale       factor
//! translate   dx dy
//! edges       [r g b]
//! ```
//!
//! Keywords are case-insensitive. Blank lines and lines starting with `#`
//! are skipped between commands. Colors default to black. Drawing
//! coordinates are integers; wireframe and transform arguments may be real.
//! Unknown keywords are skipped with a warning.
//!
//! # Example
//!
//! ```rust
//! use raster_kernel::script::{parse_script, Command};
//!
//! let commands = parse_script("line\n0 0 9 9\ncircle\n5 5 3 255 0 0\n").unwrap();
//! assert_eq!(commands.len(), 2);
//! assert!(matches!(commands[0], Command::Line(..)));
//! ```

use std::path::Path;

use log::{debug, warn};

use crate::color::Rgb;
use crate::engine::GraphicsEngine;
use crate::error::{Error, Result};
use crate::geometry::{Circle, CubicBezier, Edge, HermiteCurve, LineSegment, Pixel, Point};

/// Keywords that take an argument line.
const KEYWORDS: &[&str] = &[
    "line", "circle", "bezier", "hermite", "edge", "point", "rotate", "scale", "translate",
    "edges",
];

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw a line.
    Line(LineSegment, Rgb),
    /// Draw a circle outline.
    Circle(Circle, Rgb),
    /// Draw a cubic Bézier curve.
    Bezier(CubicBezier, Rgb),
    /// Draw a Hermite curve.
    Hermite(HermiteCurve, Rgb),
    /// Append an edge to the wireframe.
    Edge(Edge),
    /// Record a wireframe point.
    Point(Point),
    /// Rotate the wireframe (degrees).
    Rotate(f64),
    /// Scale the wireframe.
    Scale(f64),
    /// Translate the wireframe.
    Translate(f64, f64),
    /// Draw the wireframe.
    DrawEdges(Rgb),
}

impl Command {
    /// Execute this command against `engine`.
    ///
    /// # Errors
    ///
    /// Propagates transform errors from the engine.
    pub fn apply(&self, engine: &mut GraphicsEngine) -> Result<()> {
        match *self {
            Self::Line(segment, color) => engine.draw_line(segment.start, segment.end, color),
            Self::Circle(circle, color) => engine.draw_circle(circle.center, circle.radius, color),
            Self::Bezier(curve, color) => {
                let [p0, p1, p2, p3] = curve.points;
                engine.draw_bezier(p0, p1, p2, p3, color);
            }
            Self::Hermite(c, color) => engine.draw_hermite(
                c.start.x,
                c.start.y,
                c.end.x,
                c.end.y,
                c.start_tangent.x,
                c.start_tangent.y,
                c.end_tangent.x,
                c.end_tangent.y,
                color,
            ),
            Self::Edge(edge) => engine.add_edge(edge.start, edge.end),
            Self::Point(point) => engine.add_point(point),
            Self::Rotate(degrees) => engine.rotate(degrees)?,
            Self::Scale(factor) => engine.dilation(factor)?,
            Self::Translate(dx, dy) => engine.translation(dx, dy)?,
            Self::DrawEdges(color) => engine.draw_edges(color),
        }
        Ok(())
    }
}

/// Parse a command script.
///
/// # Errors
///
/// Returns [`Error::Script`] with the 1-based line number if a known keyword
/// lacks its argument line, has the wrong number of values, or a value does
/// not parse.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    let mut lines = source.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line_no, line)) = lines.next() {
        let keyword = line.trim();
        if keyword.is_empty() || keyword.starts_with('#') {
            continue;
        }

        let keyword = keyword.to_lowercase();
        if !KEYWORDS.contains(&keyword.as_str()) {
            warn!("line {line_no}: skipping unknown command '{keyword}'");
            continue;
        }

        // `edges` may end the script without its (empty) argument line.
        let (arg_line, args) = match lines.next() {
            Some(next) => next,
            None if keyword == "edges" => (line_no + 1, ""),
            None => {
                return Err(script_error(
                    line_no,
                    format!("'{keyword}' expects an argument line"),
                ))
            }
        };
        commands.push(parse_command(&keyword, arg_line, args)?);
    }

    debug!("parsed {} commands", commands.len());
    Ok(commands)
}

/// Parse `source` and run every command against `engine`.
///
/// Returns the number of commands executed. Parsing completes before any
/// command runs, so a malformed script leaves the engine untouched.
///
/// # Errors
///
/// Returns parse errors from [`parse_script`] and transform errors from
/// [`Command::apply`].
pub fn run_script(source: &str, engine: &mut GraphicsEngine) -> Result<usize> {
    let commands = parse_script(source)?;
    for command in &commands {
        command.apply(engine)?;
    }
    Ok(commands.len())
}

/// Read a script file and run it. See [`run_script`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn run_file(path: impl AsRef<Path>, engine: &mut GraphicsEngine) -> Result<usize> {
    let source = std::fs::read_to_string(path)?;
    run_script(&source, engine)
}

fn parse_command(keyword: &str, line: usize, args: &str) -> Result<Command> {
    let tokens: Vec<&str> = args.split_whitespace().collect();

    let command = match keyword {
        "line" => {
            let (v, color) = ints_with_color(line, &tokens, 4)?;
            Command::Line(
                LineSegment::new(Pixel::new(v[0], v[1]), Pixel::new(v[2], v[3])),
                color,
            )
        }
        "circle" => {
            let (v, color) = ints_with_color(line, &tokens, 3)?;
            Command::Circle(Circle::new(Pixel::new(v[0], v[1]), v[2]), color)
        }
        "bezier" => {
            let (v, color) = ints_with_color(line, &tokens, 8)?;
            Command::Bezier(
                CubicBezier::new(
                    point(v[0], v[1]),
                    point(v[2], v[3]),
                    point(v[4], v[5]),
                    point(v[6], v[7]),
                ),
                color,
            )
        }
        "hermite" => {
            let (v, color) = ints_with_color(line, &tokens, 8)?;
            Command::Hermite(
                HermiteCurve::new(
                    point(v[0], v[1]),
                    point(v[2], v[3]),
                    point(v[4], v[5]),
                    point(v[6], v[7]),
                ),
                color,
            )
        }
        "edge" => {
            let v = reals(line, &tokens, 4)?;
            Command::Edge(Edge::from_coords(v[0], v[1], v[2], v[3]))
        }
        "point" => {
            let v = reals(line, &tokens, 2)?;
            Command::Point(Point::new(v[0], v[1]))
        }
        "rotate" => Command::Rotate(reals(line, &tokens, 1)?[0]),
        "scale" => Command::Scale(reals(line, &tokens, 1)?[0]),
        "translate" => {
            let v = reals(line, &tokens, 2)?;
            Command::Translate(v[0], v[1])
        }
        "edges" => Command::DrawEdges(ints_with_color(line, &tokens, 0)?.1),
        other => return Err(script_error(line, format!("unknown command '{other}'"))),
    };

    Ok(command)
}

fn point(x: i32, y: i32) -> Point {
    Point::from(Pixel::new(x, y))
}

/// Parse `arity` integers, optionally followed by three color channels.
fn ints_with_color(line: usize, tokens: &[&str], arity: usize) -> Result<(Vec<i32>, Rgb)> {
    let color = match tokens.len() {
        n if n == arity => Rgb::BLACK,
        n if n == arity + 3 => parse_color(line, &tokens[arity..])?,
        n => {
            return Err(script_error(
                line,
                format!("expected {arity} or {} values, found {n}", arity + 3),
            ))
        }
    };

    let values = tokens[..arity]
        .iter()
        .map(|t| {
            t.parse::<i32>()
                .map_err(|_| script_error(line, format!("invalid integer '{t}'")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((values, color))
}

fn parse_color(line: usize, tokens: &[&str]) -> Result<Rgb> {
    let mut channels = [0u8; 3];
    for (channel, t) in channels.iter_mut().zip(tokens) {
        *channel = t
            .parse()
            .map_err(|_| script_error(line, format!("invalid color channel '{t}'")))?;
    }
    Ok(Rgb::from_array(channels))
}

fn reals(line: usize, tokens: &[&str], arity: usize) -> Result<Vec<f64>> {
    if tokens.len() != arity {
        return Err(script_error(
            line,
            format!("expected {arity} values, found {}", tokens.len()),
        ));
    }
    tokens
        .iter()
        .map(|t| {
            t.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| script_error(line, format!("invalid number '{t}'")))
        })
        .collect()
}

fn script_error(line: usize, message: String) -> Error {
    Error::Script { line, message }
}
