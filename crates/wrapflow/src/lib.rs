//! # wrapflow
//!
//! Graphics backend agnostic wrapping flow layout.
//!
//! This crate provides the measurement and arrangement core of a wrap panel
//! with zero dependencies on any specific UI framework. Items flow along a
//! main axis in insertion order and wrap into lines; a line can stretch its
//! items in proportion to their natural sizes so it fills the container
//! exactly, instead of leaving trailing slack the way a plain wrap layout
//! does. Hosts connect their items through the [`LayoutItem`] trait and
//! drive the two passes on [`WrapLayout`].

mod axis;
mod item;
mod primitives;
mod wrap;

pub use axis::*;
pub use item::*;
pub use primitives::*;
pub use wrap::*;
