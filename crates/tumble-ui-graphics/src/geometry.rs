//! Geometric primitives: Point, Size, Rect and rect fitting

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// A 2D extent in logical units.
///
/// Both fields are expected to be finite and non-negative. Nothing here
/// validates that; [`fit_in_rect`] in particular relies on IEEE float
/// semantics for degenerate input.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Returns true when this size fits inside `bound` on both axes.
    pub fn fits_within(&self, bound: Size) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }

    /// Method form of [`fit_in_rect`]: scales `self` to fit inside `bound`.
    pub fn fit_within(self, bound: Size) -> Size {
        fit_in_rect(bound, self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    /// Places `size` in the middle of `container`.
    ///
    /// Offsets are floored so the result stays on whole logical units, the
    /// same way fitted sizes are.
    pub fn centered_in(size: Size, container: Size) -> Self {
        let x = ((container.width - size.width) / 2.0).floor();
        let y = ((container.height - size.height) / 2.0).floor();
        Self::from_origin_size(Point::new(x, y), size)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Scale a rectangle so it fits within the bound of a maximum rectangle.
///
/// The smaller of the two per-axis scale factors is applied uniformly
/// ("contain" fit). The bound axis takes `max_rect`'s value exactly and the
/// other axis is floored, so the result never exceeds `max_rect`. When both
/// factors are equal the height-bound branch is taken.
///
/// A zero `input_rect` dimension divides by zero. This is not guarded: the
/// result follows float semantics (e.g. `NaN` when both dimensions are zero)
/// and nothing panics.
pub fn fit_in_rect(max_rect: Size, input_rect: Size) -> Size {
    // max_rect.width == input_rect.width * scale_width
    let scale_width = max_rect.width / input_rect.width;
    let scale_height = max_rect.height / input_rect.height;

    if scale_width < scale_height {
        Size {
            width: max_rect.width,
            height: (input_rect.height * scale_width).floor(),
        }
    } else {
        Size {
            width: (input_rect.width * scale_height).floor(),
            height: max_rect.height,
        }
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
