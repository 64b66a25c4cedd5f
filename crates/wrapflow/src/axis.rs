use crate::primitives::Size;

/// Flow direction of the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Lines run left to right and wrap downwards.
    #[default]
    Horizontal,
    /// Lines run top to bottom and wrap rightwards.
    Vertical,
}

/// Orientation-independent (main, cross) view of a [`Size`].
///
/// For [`Orientation::Horizontal`], main is width and cross is height; for
/// [`Orientation::Vertical`] the roles swap. Both layout passes work in this
/// space so the packing logic is written once for both orientations. The view
/// is recomputed on demand, never cached across orientation changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisSize {
    /// Extent along the flow direction.
    pub main: f32,
    /// Extent across the flow direction.
    pub cross: f32,
}

impl AxisSize {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(main: f32, cross: f32) -> Self {
        Self { main, cross }
    }

    /// View a 2D size through the given orientation.
    pub const fn from_size(orientation: Orientation, size: Size) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(size.width, size.height),
            Orientation::Vertical => Self::new(size.height, size.width),
        }
    }

    /// Convert back to a 2D size under the same orientation.
    pub const fn to_size(self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Horizontal => Size::new(self.main, self.cross),
            Orientation::Vertical => Size::new(self.cross, self.main),
        }
    }
}
