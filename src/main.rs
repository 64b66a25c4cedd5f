//! Wrapflow demo
//!
//! Lays out a batch of randomly sized boxes in a fixed viewport and logs the
//! resulting rectangles for each configuration of the layout.

use rand::Rng;
use wrapflow::{LayoutItem, Orientation, Rect, Size, WrapLayout};

const VIEWPORT: Size = Size::new(400.0, 300.0);
const BOX_COUNT: usize = 12;

/// A box with a natural size and a slot for its final geometry.
struct DemoBox {
    id: usize,
    natural: Size,
    desired: Size,
    rect: Option<Rect>,
}

impl DemoBox {
    fn new(id: usize, natural: Size) -> Self {
        Self {
            id,
            natural,
            desired: Size::ZERO,
            rect: None,
        }
    }
}

impl LayoutItem for DemoBox {
    fn measure(&mut self, proposed: Size) -> Size {
        // Natural size, clamped to the proposal where it is finite
        self.desired = Size::new(
            self.natural.width.min(proposed.width),
            self.natural.height.min(proposed.height),
        );
        self.desired
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn place(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}

fn run(label: &str, layout: &WrapLayout, boxes: &mut [Option<DemoBox>]) {
    let desired = layout.measure(boxes, VIEWPORT);

    // The container keeps the viewport's main extent and takes the desired
    // cross extent, the way a scrollable host would size a wrap panel
    let final_size = match layout.orientation {
        Orientation::Horizontal => Size::new(VIEWPORT.width, desired.height),
        Orientation::Vertical => Size::new(desired.width, VIEWPORT.height),
    };
    layout.arrange(boxes, final_size);

    log::info!(
        "{label}: desired {:.0}x{:.0}, arranged into {:.0}x{:.0}",
        desired.width,
        desired.height,
        final_size.width,
        final_size.height
    );
    for b in boxes.iter().flatten() {
        if let Some(rect) = b.rect {
            log::info!(
                "  box {:>2}: natural {:>3.0}x{:<3.0} -> ({:>5.1}, {:>5.1}) {:>5.1}x{:.1}",
                b.id,
                b.natural.width,
                b.natural.height,
                rect.min.x,
                rect.min.y,
                rect.width(),
                rect.height()
            );
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::rng();
    let mut boxes: Vec<Option<DemoBox>> = (0..BOX_COUNT)
        .map(|id| {
            let natural = Size::new(
                rng.random_range(40.0..140.0),
                rng.random_range(20.0..60.0),
            );
            Some(DemoBox::new(id, natural))
        })
        .collect();

    run("proportional", &WrapLayout::new(), &mut boxes);
    run(
        "natural",
        &WrapLayout::new().with_stretch_proportionally(false),
        &mut boxes,
    );
    run(
        "fixed cells",
        &WrapLayout::new().with_item_width(80.0).with_item_height(40.0),
        &mut boxes,
    );
    run(
        "vertical",
        &WrapLayout::new().with_orientation(Orientation::Vertical),
        &mut boxes,
    );

    // Vacant slots are skipped, the way a host with a not-yet-compacted
    // collection would present them
    boxes[5] = None;
    run("with a vacant slot", &WrapLayout::new(), &mut boxes);
}
