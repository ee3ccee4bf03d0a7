//! Render nodes produced by widgets.
//!
//! A [`RenderNode`] is a plain value: widgets build new nodes from the ones
//! they are handed and never patch a node that someone else still owns.

use std::fmt;

use crate::style::Style;

/// Scroll behavior of a [`NodeType::ScrollView`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpec {
    pub horizontal: bool,
    pub paging_enabled: bool,
}

impl ScrollSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn paging_enabled(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }
}

/// Display names of the layout-only containers.
pub const PLAIN_CONTAINER_NAMES: [&str; 2] = ["View", "RCTView"];

/// Identity of a node: which primitive (or user component) renders it.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeType {
    /// Layout-only container.
    View,
    /// The host's native view class backing [`NodeType::View`].
    NativeView,
    Text,
    Image,
    ScrollView(ScrollSpec),
    /// Native paging container.
    ViewPager,
    /// User component. Anonymous components have no display name.
    Component { display_name: Option<String> },
}

impl NodeType {
    pub fn component(display_name: impl Into<String>) -> Self {
        NodeType::Component {
            display_name: Some(display_name.into()),
        }
    }

    pub fn anonymous() -> Self {
        NodeType::Component { display_name: None }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            NodeType::View => Some("View"),
            NodeType::NativeView => Some("RCTView"),
            NodeType::Text => Some("Text"),
            NodeType::Image => Some("Image"),
            NodeType::ScrollView(_) => Some("ScrollView"),
            NodeType::ViewPager => Some("ViewPager"),
            NodeType::Component { display_name } => display_name.as_deref(),
        }
    }

    /// Returns true for nodes whose only job is grouping children.
    ///
    /// Matched on display name, so a component named after one of the plain
    /// containers counts as one.
    pub fn is_plain_container(&self) -> bool {
        self.display_name().is_some_and(|name| PLAIN_CONTAINER_NAMES.contains(&name))
    }
}

/// Everything about a node except its type.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeProps {
    pub style: Style,
    /// Whether the host may fold this node into its parent when it only
    /// affects layout.
    pub collapsable: bool,
    pub text: Option<String>,
    pub children: Vec<RenderNode>,
}

impl Default for NodeProps {
    fn default() -> Self {
        Self {
            style: Style::empty(),
            collapsable: true,
            text: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
    node_type: NodeType,
    props: NodeProps,
}

impl RenderNode {
    pub fn new(node_type: NodeType) -> Self {
        Self::from_parts(node_type, NodeProps::default())
    }

    pub fn from_parts(node_type: NodeType, props: NodeProps) -> Self {
        Self { node_type, props }
    }

    pub fn into_parts(self) -> (NodeType, NodeProps) {
        (self.node_type, self.props)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.props.style = style;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.props.text = Some(text.into());
        self
    }

    pub fn with_collapsable(mut self, collapsable: bool) -> Self {
        self.props.collapsable = collapsable;
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.props.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.props.children.extend(children);
        self
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn props(&self) -> &NodeProps {
        &self.props
    }

    pub fn style(&self) -> &Style {
        &self.props.style
    }

    pub fn is_collapsable(&self) -> bool {
        self.props.collapsable
    }

    pub fn text(&self) -> Option<&str> {
        self.props.text.as_deref()
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.props.children
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&RenderNode, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at(&self, depth: usize, visit: &mut impl FnMut(&RenderNode, usize)) {
        visit(self, depth);
        for child in &self.props.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

/// Indented tree dump, one node per line.
impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.walk(&mut |node: &RenderNode, depth: usize| {
            if result.is_ok() {
                result = write_node_line(f, node, depth);
            }
        });
        result
    }
}

fn write_node_line(f: &mut fmt::Formatter<'_>, node: &RenderNode, depth: usize) -> fmt::Result {
    write!(
        f,
        "{:indent$}{}",
        "",
        node.node_type.display_name().unwrap_or("<anonymous>"),
        indent = depth * 2
    )?;
    if let NodeType::ScrollView(spec) = &node.node_type {
        if spec.horizontal {
            f.write_str(" horizontal")?;
        }
        if spec.paging_enabled {
            f.write_str(" paging")?;
        }
    }
    if !node.props.style.is_empty() {
        write!(f, " {}", node.props.style.resolve())?;
    }
    if !node.props.collapsable {
        f.write_str(" collapsable=false")?;
    }
    if let Some(text) = &node.props.text {
        write!(f, " {text:?}")?;
    }
    writeln!(f)
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
