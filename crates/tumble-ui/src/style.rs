//! Node styles.
//!
//! A [`Style`] is an ordered chain of [`StyleFragment`]s, built the same way
//! modifiers are: every builder call appends a fragment. Fragments are never
//! merged eagerly; [`Style::resolve`] folds them in order and later values
//! win on conflicting properties.

use std::fmt;

use smallvec::SmallVec;
use tumble_ui_graphics::{Color, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProperty {
    Width(f32),
    Height(f32),
    Flex(f32),
    Padding(f32),
    BackgroundColor(Color),
}

/// A group of properties contributed by one caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleFragment {
    properties: SmallVec<[StyleProperty; 2]>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment forcing both dimensions to `size`.
    pub fn size(size: Size) -> Self {
        Self::new()
            .with(StyleProperty::Width(size.width))
            .with(StyleProperty::Height(size.height))
    }

    pub fn with(mut self, property: StyleProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(&self) -> &[StyleProperty] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    fragments: SmallVec<[StyleFragment; 2]>,
}

impl Style {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `fragment` after every fragment already in the chain.
    ///
    /// Empty fragments are dropped.
    pub fn then(mut self, fragment: StyleFragment) -> Self {
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
        self
    }

    /// Appends every fragment of `other`, keeping their order.
    pub fn concat(mut self, other: Style) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Example: `Style::empty().size(Size::new(320.0, 568.0))`
    pub fn size(self, size: Size) -> Self {
        self.then(StyleFragment::size(size))
    }

    pub fn width(self, width: f32) -> Self {
        self.then(StyleFragment::new().with(StyleProperty::Width(width)))
    }

    pub fn height(self, height: f32) -> Self {
        self.then(StyleFragment::new().with(StyleProperty::Height(height)))
    }

    pub fn flex(self, flex: f32) -> Self {
        self.then(StyleFragment::new().with(StyleProperty::Flex(flex)))
    }

    /// Uniform padding on all sides.
    pub fn padding(self, padding: f32) -> Self {
        self.then(StyleFragment::new().with(StyleProperty::Padding(padding)))
    }

    /// Example: `Style::empty().background(Color::from_hex(0x36465d))`
    pub fn background(self, color: Color) -> Self {
        self.then(StyleFragment::new().with(StyleProperty::BackgroundColor(color)))
    }

    pub fn fragments(&self) -> &[StyleFragment] {
        &self.fragments
    }

    pub fn last_fragment(&self) -> Option<&StyleFragment> {
        self.fragments.last()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Folds the chain into one set of values. Later fragments override
    /// earlier ones.
    pub fn resolve(&self) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::default();
        for property in self.fragments.iter().flat_map(|f| f.properties.iter()) {
            match *property {
                StyleProperty::Width(width) => resolved.width = Some(width),
                StyleProperty::Height(height) => resolved.height = Some(height),
                StyleProperty::Flex(flex) => resolved.flex = Some(flex),
                StyleProperty::Padding(padding) => resolved.padding = Some(padding),
                StyleProperty::BackgroundColor(color) => resolved.background = Some(color),
            }
        }
        resolved
    }
}

impl From<StyleFragment> for Style {
    fn from(fragment: StyleFragment) -> Self {
        Style::empty().then(fragment)
    }
}

/// Effective style values after merging a [`Style`] chain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub flex: Option<f32>,
    pub padding: Option<f32>,
    pub background: Option<Color>,
}

impl ResolvedStyle {
    /// Both dimensions, if both are set.
    pub fn size(&self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<String> = Vec::new();
        if let Some(width) = self.width {
            entries.push(format!("width: {width}"));
        }
        if let Some(height) = self.height {
            entries.push(format!("height: {height}"));
        }
        if let Some(flex) = self.flex {
            entries.push(format!("flex: {flex}"));
        }
        if let Some(padding) = self.padding {
            entries.push(format!("padding: {padding}"));
        }
        if let Some(color) = self.background {
            entries.push(format!("background: {color}"));
        }
        write!(f, "{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
