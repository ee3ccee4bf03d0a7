//! Pure math/data for sizes, rects and colors in Tumble
//!
//! This crate contains the geometry primitives and color definitions used
//! by the pager widgets, plus [`fit_in_rect`] for sizing image content.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;
