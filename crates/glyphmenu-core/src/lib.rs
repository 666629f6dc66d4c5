//! Core types and traits for the glyphmenu widget.
//!
//! This crate provides the pieces every menu backend shares:
//! - Geometric primitives: [`Point`], [`Size`]
//! - Color representation: [`Color`]
//! - Painting: the [`Canvas`] trait and [`RecordingCanvas`]
//! - Collaborators: [`FontMetrics`], [`AudioSink`], [`MenuInput`]
//! - Configuration: [`MenuStyle`] and [`ConfigError`]

mod canvas;
mod color;
mod error;
mod geometry;
mod services;
mod style;
pub mod time;

pub use canvas::{Canvas, DrawCommand, Justify, RecordingCanvas, Transform2D};
pub use color::{Color, ColorParseError};
pub use error::ConfigError;
pub use geometry::{Point, Size};
pub use services::{AudioSink, FontMetrics, MenuControl, MenuInput, SilentAudio, SoundId};
pub use style::MenuStyle;
