use crate::core::{Point, Rgba, Size};

use super::DrawSurface;

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        pos: Point,
        size: Size,
        color: Rgba,
    },
    FillEllipse {
        pos: Point,
        size: Size,
        color: Rgba,
    },
    StrokePolyline {
        points: Vec<Point>,
        width: f32,
        color: Rgba,
    },
    StrokeRect {
        pos: Point,
        size: Size,
        width: f32,
        color: Rgba,
    },
    StrokeRoundedRect {
        pos: Point,
        size: Size,
        width: f32,
        radius: f32,
        color: Rgba,
    },
}

impl DrawCommand {
    /// `true` when every coordinate and dimension is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::FillRect { pos, size, .. } | DrawCommand::FillEllipse { pos, size, .. } => {
                pos.is_finite() && size.is_finite()
            }
            DrawCommand::StrokePolyline { points, width, .. } => {
                width.is_finite() && points.iter().all(|p| p.is_finite())
            }
            DrawCommand::StrokeRect { pos, size, width, .. } => {
                pos.is_finite() && size.is_finite() && width.is_finite()
            }
            DrawCommand::StrokeRoundedRect {
                pos,
                size,
                width,
                radius,
                ..
            } => pos.is_finite() && size.is_finite() && width.is_finite() && radius.is_finite(),
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::FillEllipse { color, .. }
            | DrawCommand::StrokePolyline { color, .. }
            | DrawCommand::StrokeRect { color, .. }
            | DrawCommand::StrokeRoundedRect { color, .. } => *color,
        }
    }
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Issues every recorded command against `target`, in order.
    pub fn replay(&self, target: &mut dyn DrawSurface) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillRect { pos, size, color } => target.fill_rect(*pos, *size, *color),
                DrawCommand::FillEllipse { pos, size, color } => {
                    target.fill_ellipse(*pos, *size, *color)
                }
                DrawCommand::StrokePolyline { points, width, color } => {
                    target.stroke_polyline(points, *width, *color)
                }
                DrawCommand::StrokeRect {
                    pos,
                    size,
                    width,
                    color,
                } => target.stroke_rect(*pos, *size, *width, *color),
                DrawCommand::StrokeRoundedRect {
                    pos,
                    size,
                    width,
                    radius,
                    color,
                } => target.stroke_rounded_rect(*pos, *size, *width, *radius, *color),
            }
        }
    }
}

impl DrawSurface for CommandRecorder {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, pos: Point, size: Size, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn fill_ellipse(&mut self, pos: Point, size: Size, color: Rgba) {
        self.commands.push(DrawCommand::FillEllipse { pos, size, color });
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokePolyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_rect(&mut self, pos: Point, size: Size, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeRect {
            pos,
            size,
            width,
            color,
        });
    }

    fn stroke_rounded_rect(&mut self, pos: Point, size: Size, width: f32, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            pos,
            size,
            width,
            radius,
            color,
        });
    }
}
