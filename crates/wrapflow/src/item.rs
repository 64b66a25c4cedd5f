//! Host-side item interface for the layout passes.
//!
//! The core does not own the items it lays out: the host collection supplies
//! them in insertion order and the passes only request sizes and hand back
//! rectangles. Both passes take the collection as `&mut [Option<C>]`; a
//! `None` slot is a removed-but-not-compacted entry and is skipped.

use crate::primitives::{Rect, Size};

/// An item the wrap layout can measure and place.
///
/// Implementors record the desired size computed by [`measure`] so the
/// arrangement pass can read it back through [`desired_size`] without
/// re-measuring. This mirrors the usual two-phase layout contract where
/// arrangement must not trigger new measurement.
///
/// [`measure`]: LayoutItem::measure
/// [`desired_size`]: LayoutItem::desired_size
pub trait LayoutItem {
    /// Compute and record the desired size under the proposed bounds.
    ///
    /// Called at most once per item per measurement pass. The proposed size
    /// carries the container's constraint (or the configured fixed cell
    /// dimensions); it is not reduced by space other items already occupy on
    /// the current line.
    fn measure(&mut self, proposed: Size) -> Size;

    /// The desired size recorded by the most recent [`measure`](Self::measure) call.
    fn desired_size(&self) -> Size;

    /// Receive final geometry. Called exactly once per present item per
    /// arrangement pass, in item order.
    fn place(&mut self, rect: Rect);
}
