//! Cross-platform horizontal pager.
//!
//! Android ships a native paging container, so the pager hands its pages to
//! [`ViewPager`] and lets the host size them. Every other host gets a
//! horizontal, paging-enabled [`ScrollView`] in which each page is stretched
//! to the pager size by hand.

#![allow(non_snake_case)]

use std::fmt;

use tumble_core::Platform;
use tumble_ui_graphics::Size;

use crate::node::{NodeType, RenderNode, ScrollSpec};
use crate::style::{Style, StyleFragment};
use crate::widgets::{ScrollView, ViewPager};

/// Properties shared by [`Pager`] and both of its renderers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagerProps {
    /// Size of the pager, and therefore of every page.
    pub size: Size,
    /// Pages in order. `None` entries are skipped.
    pub children: Vec<Option<RenderNode>>,
}

impl PagerProps {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            children: Vec::new(),
        }
    }

    pub fn page(mut self, page: RenderNode) -> Self {
        self.children.push(Some(page));
        self
    }

    pub fn pages(mut self, pages: impl IntoIterator<Item = Option<RenderNode>>) -> Self {
        self.children.extend(pages);
        self
    }
}

/// How a pager is rendered on a given host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerStrategy {
    /// Delegate to the host's paging container.
    Native,
    /// Horizontal paging scroll view with pages sized by hand.
    ScrollEmulated,
}

impl PagerStrategy {
    /// Hosts without a native pager, including unrecognized ones, get the
    /// emulated pager.
    pub fn for_platform(platform: &Platform) -> Self {
        if platform.has_native_pager() {
            return PagerStrategy::Native;
        }
        if let Platform::Other(identifier) = platform {
            log::debug!("no native pager on platform {identifier:?}, emulating with ScrollView");
        }
        PagerStrategy::ScrollEmulated
    }

    pub fn render(self, props: PagerProps) -> RenderNode {
        match self {
            PagerStrategy::Native => NativeViewPager(props),
            PagerStrategy::ScrollEmulated => ScrollEmulatedPager(props),
        }
    }
}

/// Horizontal pager for the current platform.
pub fn Pager(props: PagerProps) -> RenderNode {
    PagerOn(&Platform::current(), props)
}

/// Horizontal pager rendered the way `platform` expects.
pub fn PagerOn(platform: &Platform, props: PagerProps) -> RenderNode {
    PagerStrategy::for_platform(platform).render(props)
}

/// Pager backed by the native paging container. Pages are passed through
/// untouched; the container is responsible for sizing them.
pub fn NativeViewPager(props: PagerProps) -> RenderNode {
    let PagerProps { size, children } = props;
    ViewPager(Style::empty().size(size), children.into_iter().flatten())
}

/// Pager emulated with a horizontal, paging-enabled scroll view.
///
/// Each page is rebuilt with the pager size appended as its last style
/// fragment and with collapsing disabled, so the host measures every page as
/// its own layer. Pages that are not plain views still render, but log a
/// warning.
pub fn ScrollEmulatedPager(props: PagerProps) -> RenderNode {
    let PagerProps { size, children } = props;
    let pages: Vec<RenderNode> = children
        .into_iter()
        .flatten()
        .map(|page| stretch_page(page, size))
        .collect();

    ScrollView(
        ScrollSpec::new().horizontal(true).paging_enabled(true),
        pages,
    )
}

fn stretch_page(page: RenderNode, size: Size) -> RenderNode {
    let (node_type, mut props) = page.into_parts();

    if let Some(warning) = check_page_type(&node_type) {
        log::warn!("{warning}");
    }

    props.style = props.style.then(StyleFragment::size(size));
    // Collapsed pages lose their own frame and break the paging geometry.
    props.collapsable = false;

    RenderNode::from_parts(node_type, props)
}

/// A page that is not a plain [`View`](crate::widgets::View).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTypeWarning {
    pub display_name: String,
}

impl fmt::Display for PageTypeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Each pager page must be a View. Was {}",
            self.display_name
        )
    }
}

/// Checks whether `node_type` may be used as an emulated pager page.
///
/// Plain containers pass. Anonymous components pass too, since there is no
/// name to report.
pub fn check_page_type(node_type: &NodeType) -> Option<PageTypeWarning> {
    if node_type.is_plain_container() {
        return None;
    }
    node_type.display_name().map(|name| PageTypeWarning {
        display_name: name.to_owned(),
    })
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;
