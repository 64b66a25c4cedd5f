use glam::Vec2;

use crate::axis::{AxisSize, Orientation};
use crate::item::LayoutItem;
use crate::primitives::{Rect, Size};

/// Parameters of the wrapping stretch layout.
///
/// Items flow along the main axis in insertion order and wrap into a new line
/// when the next item would overflow the container. During arrangement each
/// line is placed by one of two strategies: fixed-cell/natural slots, or
/// proportional stretching so the line fills the container's main extent
/// exactly instead of leaving trailing slack.
///
/// Parameters are plain values; changing any of them between passes
/// invalidates the previous layout and the host is expected to run both
/// passes again.
#[derive(Clone, Copy, Debug)]
pub struct WrapLayout {
    /// Fixed width for every item. `None` uses each item's natural width.
    pub item_width: Option<f32>,
    /// Fixed height for every item. `None` uses each item's natural height.
    pub item_height: Option<f32>,
    /// Flow direction of lines.
    pub orientation: Orientation,
    /// Stretch each line's items in proportion to their natural sizes so the
    /// line fills the main axis. Only applies when no fixed size is set on
    /// the main axis; disabled, items keep their natural main-axis size.
    pub stretch_proportionally: bool,
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self {
            item_width: None,
            item_height: None,
            orientation: Orientation::Horizontal,
            stretch_proportionally: true,
        }
    }
}

impl WrapLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every item to the given width
    pub fn with_item_width(mut self, width: f32) -> Self {
        self.item_width = Some(width);
        self
    }

    /// Force every item to the given height
    pub fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = Some(height);
        self
    }

    /// Set the flow direction
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable proportional stretching
    pub fn with_stretch_proportionally(mut self, stretch: bool) -> Self {
        self.stretch_proportionally = stretch;
        self
    }

    /// Measurement pass: pack items into lines against `available` and
    /// return the size the container needs.
    ///
    /// Every present item is measured exactly once, all with the same
    /// proposed size: the configured fixed cell dimensions where set, the
    /// container's constraint elsewhere. Either axis of `available` may be
    /// infinite; an infinite main axis means nothing ever wraps.
    ///
    /// An item that is wider than the main-axis limit all by itself gets a
    /// dedicated line, so the reported size can exceed `available`.
    pub fn measure<C: LayoutItem>(&self, children: &mut [Option<C>], available: Size) -> Size {
        let limit = AxisSize::from_size(self.orientation, available);
        let proposed = Size::new(
            self.item_width.unwrap_or(available.width),
            self.item_height.unwrap_or(available.height),
        );

        let mut line = AxisSize::ZERO;
        let mut panel = AxisSize::ZERO;

        for child in children.iter_mut().flatten() {
            let size = self.effective_size(child.measure(proposed));

            if line.main + size.main > limit.main {
                // Close the current line and open a new one with this item
                panel.main = panel.main.max(line.main);
                panel.cross += line.cross;
                line = size;

                if size.main > limit.main {
                    // Wider than the limit on its own: dedicated line
                    panel.main = panel.main.max(size.main);
                    panel.cross += size.cross;
                    line = AxisSize::ZERO;
                }
            } else {
                line.main += size.main;
                line.cross = line.cross.max(size.cross);
            }
        }

        // Fold in the trailing line
        panel.main = panel.main.max(line.main);
        panel.cross += line.cross;

        let desired = panel.to_size(self.orientation);
        log::debug!(
            "measure: {} items in {:?} -> desired {}x{}",
            children.iter().flatten().count(),
            available,
            desired.width,
            desired.height
        );
        desired
    }

    /// Arrangement pass: re-derive the line boundaries against `final_size`
    /// and hand every present item its rectangle, in item order.
    ///
    /// Packing follows the same greedy rule as [`measure`](Self::measure),
    /// reading the desired sizes recorded by the most recent measurement, so
    /// both passes agree on line boundaries as long as `final_size` is
    /// consistent with the measured constraint. Returns `final_size`
    /// unchanged; arrangement never resizes the container.
    pub fn arrange<C: LayoutItem>(&self, children: &mut [Option<C>], final_size: Size) -> Size {
        let limit = AxisSize::from_size(self.orientation, final_size);

        let mut first_in_line = 0;
        let mut line = AxisSize::ZERO;
        let mut cross_offset = 0.0;

        for index in 0..children.len() {
            let size = match children[index].as_ref() {
                Some(child) => self.effective_size(child.desired_size()),
                None => continue,
            };

            if line.main + size.main > limit.main {
                self.place_line(
                    &mut children[first_in_line..index],
                    cross_offset,
                    line.cross,
                    limit.main,
                );
                cross_offset += line.cross;
                line = size;
                first_in_line = index;

                if size.main > limit.main {
                    // Dedicated line for the oversized item
                    self.place_line(
                        &mut children[index..index + 1],
                        cross_offset,
                        size.cross,
                        limit.main,
                    );
                    cross_offset += size.cross;
                    line = AxisSize::ZERO;
                    first_in_line = index + 1;
                }
            } else {
                line.main += size.main;
                line.cross = line.cross.max(size.cross);
            }
        }

        // Place the trailing line, if any items remain
        if first_in_line < children.len() {
            self.place_line(
                &mut children[first_in_line..],
                cross_offset,
                line.cross,
                limit.main,
            );
        }

        log::trace!(
            "arrange: {} items into {:?}",
            children.iter().flatten().count(),
            final_size
        );
        final_size
    }

    /// Fixed size on the main axis, if configured.
    fn fixed_main(&self) -> Option<f32> {
        match self.orientation {
            Orientation::Horizontal => self.item_width,
            Orientation::Vertical => self.item_height,
        }
    }

    /// Effective (main, cross) footprint of an item: the fixed cell
    /// dimensions where configured, the item's own desired size elsewhere.
    fn effective_size(&self, desired: Size) -> AxisSize {
        let size = Size::new(
            self.item_width.unwrap_or(desired.width),
            self.item_height.unwrap_or(desired.height),
        );
        AxisSize::from_size(self.orientation, size)
    }

    /// Place one completed line, choosing the strategy: proportional stretch
    /// when stretching is enabled and no fixed main-axis size is set,
    /// fixed-cell/natural slots otherwise.
    fn place_line<C: LayoutItem>(
        &self,
        line: &mut [Option<C>],
        cross_offset: f32,
        line_cross: f32,
        limit_main: f32,
    ) {
        if self.fixed_main().is_none() && self.stretch_proportionally {
            self.place_line_proportionally(line, cross_offset, line_cross, limit_main);
        } else {
            self.place_line_fixed(line, cross_offset, line_cross);
        }
    }

    /// Walk the line at an accumulating main-axis offset, giving each item a
    /// slot of the configured fixed main size, or its natural main size when
    /// none is set. The cross-axis slot is always the line's full cross
    /// extent, so every item is cross-stretched to the line's largest member.
    fn place_line_fixed<C: LayoutItem>(
        &self,
        line: &mut [Option<C>],
        cross_offset: f32,
        line_cross: f32,
    ) {
        let fixed_main = self.fixed_main();
        let mut main_offset = 0.0;

        for child in line.iter_mut().flatten() {
            let natural = AxisSize::from_size(self.orientation, child.desired_size());
            let slot_main = fixed_main.unwrap_or(natural.main);
            child.place(self.slot_rect(main_offset, cross_offset, slot_main, line_cross));
            main_offset += slot_main;
        }
    }

    /// Stretch (or shrink) every item on the line in proportion to its
    /// natural main-axis size, so the slots sum to exactly `limit_main` and
    /// each item keeps its relative share. Offsets accumulate the stretched
    /// sizes, leaving no gaps or overlaps.
    fn place_line_proportionally<C: LayoutItem>(
        &self,
        line: &mut [Option<C>],
        cross_offset: f32,
        line_cross: f32,
        limit_main: f32,
    ) {
        let total: f32 = line
            .iter()
            .flatten()
            .map(|child| AxisSize::from_size(self.orientation, child.desired_size()).main)
            .sum();

        // A zero-sum line has no shares to scale; collapse it to zero-width
        // slots rather than divide by zero. An unbounded line has nothing to
        // fill, so items keep their natural size.
        let multiplier = if !limit_main.is_finite() {
            1.0
        } else if total > 0.0 {
            limit_main / total
        } else {
            0.0
        };

        let mut main_offset = 0.0;
        for child in line.iter_mut().flatten() {
            let natural = AxisSize::from_size(self.orientation, child.desired_size());
            let slot_main = natural.main * multiplier;
            child.place(self.slot_rect(main_offset, cross_offset, slot_main, line_cross));
            main_offset += slot_main;
        }
    }

    /// Map a (main, cross) slot back to screen coordinates.
    fn slot_rect(
        &self,
        main_offset: f32,
        cross_offset: f32,
        slot_main: f32,
        slot_cross: f32,
    ) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::from_min_size(
                Vec2::new(main_offset, cross_offset),
                Size::new(slot_main, slot_cross),
            ),
            Orientation::Vertical => Rect::from_min_size(
                Vec2::new(cross_offset, main_offset),
                Size::new(slot_cross, slot_main),
            ),
        }
    }
}
