//! Drawing surface abstraction and a recording implementation.
//!
//! Menus paint through the [`Canvas`] trait: a transform stack plus a single
//! justified text primitive. [`RecordingCanvas`] captures the calls as
//! [`DrawCommand`]s, which is what tests and snapshotting use.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a translation transform from a point offset.
    #[must_use]
    pub const fn translate_by(offset: Point) -> Self {
        Self::translate(offset.x, offset.y)
    }

    /// Compose so that `inner` is applied first, then `self`.
    #[must_use]
    pub fn then(&self, inner: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.matrix;
        let [a2, b2, c2, d2, e2, f2] = inner.matrix;
        Self {
            matrix: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    /// Map a point through this transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Normalized text anchor: `(0, 0)` is top-left of the text box, `(1, 1)`
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Justify {
    /// Horizontal anchor [0.0, 1.0]
    pub x: f32,
    /// Vertical anchor [0.0, 1.0]
    pub y: f32,
}

impl Justify {
    /// Anchor at the top-left corner.
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 0.0 };
    /// Anchor at the horizontal center of the top edge.
    pub const TOP_CENTER: Self = Self { x: 0.5, y: 0.0 };

    /// Create a justification, clamping both axes to [0.0, 1.0].
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

impl Default for Justify {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the batching backend.
pub trait Canvas {
    /// Push a transform, composed with the current one.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the most recently pushed transform.
    fn pop_transform(&mut self);

    /// Draw text anchored at `at` using the given justification.
    fn draw_text(&mut self, text: &str, at: Point, justify: Justify, color: Color);
}

/// A recorded canvas operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Transform pushed (the composed result is stored)
    PushTransform {
        /// Composed transform after the push
        transform: Transform2D,
    },
    /// Transform popped
    PopTransform,
    /// Text drawn
    Text {
        /// Text content
        content: String,
        /// Anchor in local coordinates
        position: Point,
        /// Anchor after the current transform
        world: Point,
        /// Justification
        justify: Justify,
        /// Text color
        color: Color,
    },
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate over recorded text draws as `(content, world, color)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                content,
                world,
                color,
                ..
            } => Some((content.as_str(), *world, *color)),
            _ => None,
        })
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }
}

impl Canvas for RecordingCanvas {
    fn push_transform(&mut self, transform: Transform2D) {
        let composed = self.current_transform().then(&transform);
        self.transform_stack.push(composed);
        self.commands.push(DrawCommand::PushTransform {
            transform: composed,
        });
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
        self.commands.push(DrawCommand::PopTransform);
    }

    fn draw_text(&mut self, text: &str, at: Point, justify: Justify, color: Color) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position: at,
            world: self.current_transform().apply(at),
            justify,
            color,
        });
    }
}
