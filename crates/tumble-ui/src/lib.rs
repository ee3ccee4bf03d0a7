//! UI primitives and widgets for Tumble
//!
//! Widgets are plain functions returning [`RenderNode`] values. The host
//! rendering pipeline consumes the tree; nothing here keeps state between
//! calls.

#![allow(non_snake_case)]

pub mod node;
pub mod style;
pub mod widgets;

pub use node::{NodeProps, NodeType, RenderNode, ScrollSpec, PLAIN_CONTAINER_NAMES};
pub use style::{ResolvedStyle, Style, StyleFragment, StyleProperty};
pub use widgets::*;

pub use tumble_core::Platform;
pub use tumble_ui_graphics::{fit_in_rect, Color, Point, Rect, Size};
