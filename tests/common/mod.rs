//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use segdrop::{DropLocation, IndicatorHost, Point, Rect};

pub const CONTAINER: Rect = Rect::new(0, 0, 800, 600);

/// Host with directly settable geometry that records what the overlay publishes
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub container: Rect,
    pub hovered: Option<Rect>,
    pub panel_count: usize,
    /// Screen position of the overlay's origin
    pub origin: Point,
    pub published: Vec<DropLocation>,
    pub repaints: usize,
}

impl FakeHost {
    pub fn new(container: Rect, hovered: Option<Rect>, panel_count: usize) -> Self {
        Self {
            container,
            hovered,
            panel_count,
            origin: Point::default(),
            published: Vec::new(),
            repaints: 0,
        }
    }

    pub fn last_published(&self) -> Option<DropLocation> {
        self.published.last().copied()
    }
}

impl IndicatorHost for FakeHost {
    fn panel_count(&self) -> usize {
        self.panel_count
    }

    fn hovered_frame_rect(&self) -> Option<Rect> {
        self.hovered
    }

    fn container_rect(&self) -> Rect {
        self.container
    }

    fn map_from_global(&self, global: Point) -> Point {
        global - self.origin
    }

    fn set_current_drop_location(&mut self, location: DropLocation) {
        self.published.push(location);
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}

/// Every integer point in `rect`, stepping by `step`
pub fn sample_points(rect: Rect, step: i32) -> impl Iterator<Item = Point> {
    let step = step.max(1) as usize;
    (rect.top()..=rect.bottom())
        .step_by(step)
        .flat_map(move |y| (rect.left()..=rect.right()).step_by(step).map(move |x| Point::new(x, y)))
}
