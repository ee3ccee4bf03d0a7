//! Host primitives: the leaf and container nodes other widgets build on.

#![allow(non_snake_case)]

use crate::node::{NodeType, RenderNode, ScrollSpec};
use crate::style::Style;

/// Layout-only container.
pub fn View(style: Style, children: impl IntoIterator<Item = RenderNode>) -> RenderNode {
    RenderNode::new(NodeType::View)
        .with_style(style)
        .with_children(children)
}

pub fn Text(style: Style, text: impl Into<String>) -> RenderNode {
    RenderNode::new(NodeType::Text)
        .with_style(style)
        .with_text(text)
}

/// Image placeholder; `source` is carried as the node text.
pub fn Image(style: Style, source: impl Into<String>) -> RenderNode {
    RenderNode::new(NodeType::Image)
        .with_style(style)
        .with_text(source)
}

pub fn ScrollView(spec: ScrollSpec, children: impl IntoIterator<Item = RenderNode>) -> RenderNode {
    RenderNode::new(NodeType::ScrollView(spec)).with_children(children)
}

/// Native paging container. Only hosts where
/// [`Platform::has_native_pager`](tumble_core::Platform::has_native_pager)
/// holds can render it.
pub fn ViewPager(style: Style, children: impl IntoIterator<Item = RenderNode>) -> RenderNode {
    RenderNode::new(NodeType::ViewPager)
        .with_style(style)
        .with_children(children)
}

/// User component wrapping `children`.
pub fn Component(
    display_name: impl Into<String>,
    style: Style,
    children: impl IntoIterator<Item = RenderNode>,
) -> RenderNode {
    RenderNode::new(NodeType::component(display_name))
        .with_style(style)
        .with_children(children)
}
