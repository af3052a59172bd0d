// File: crates/chart-shape/src/curve/path.rs
// Summary: Path sink trait written to by curve generators, and a recording builder with SVG output.

use std::fmt;

/// Receiver of path commands, in the canvas path style.
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    fn close_path(&mut self);
}

impl<T: PathSink + ?Sized> PathSink for &mut T {
    fn move_to(&mut self, x: f64, y: f64) { (**self).move_to(x, y) }
    fn line_to(&mut self, x: f64, y: f64) { (**self).line_to(x, y) }
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).bezier_curve_to(x1, y1, x2, y2, x, y)
    }
    fn close_path(&mut self) { (**self).close_path() }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// Records path commands; `Display` renders SVG path data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the recorded commands into another sink.
    pub fn replay(&self, sink: &mut dyn PathSink) {
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(x, y) => sink.move_to(x, y),
                PathCommand::LineTo(x, y) => sink.line_to(x, y),
                PathCommand::CubicTo(x1, y1, x2, y2, x, y) => sink.bezier_curve_to(x1, y1, x2, y2, x, y),
                PathCommand::Close => sink.close_path(),
            }
        }
    }
}

impl PathSink for PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(x, y));
    }
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo(x1, y1, x2, y2, x, y));
    }
    fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(x, y) => write!(f, "M{x},{y}")?,
                PathCommand::LineTo(x, y) => write!(f, "L{x},{y}")?,
                PathCommand::CubicTo(x1, y1, x2, y2, x, y) => write!(f, "C{x1},{y1},{x2},{y2},{x},{y}")?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Swaps x and y on the way through; turns an x-monotone curve into a y-monotone one.
pub(crate) struct Reflect<K>(pub K);

impl<K: PathSink> PathSink for Reflect<K> {
    fn move_to(&mut self, x: f64, y: f64) { self.0.move_to(y, x) }
    fn line_to(&mut self, x: f64, y: f64) { self.0.line_to(y, x) }
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.0.bezier_curve_to(y1, x1, y2, x2, y, x)
    }
    fn close_path(&mut self) { self.0.close_path() }
}
