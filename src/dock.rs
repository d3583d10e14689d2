//! A minimal dock area that hosts the indicator overlay
//!
//! Used by the demo window and the screenshot tool: panels are plain rects,
//! the hovered panel is whichever one contains the last pointer position.

use crate::geometry::{Point, Rect};
use crate::indicator::{DropLocation, IndicatorHost};

#[derive(Debug, Clone)]
pub struct DockArea {
    /// Screen position of the area's top-left corner
    pub origin: Point,
    pub width: i32,
    pub height: i32,
    panels: Vec<Rect>,
    pointer: Option<Point>,
    drop_location: DropLocation,
    repaint_requested: bool,
}

impl DockArea {
    /// Dock area split into `count` equal side-by-side panels
    pub fn with_columns(width: i32, height: i32, count: usize) -> Self {
        let mut area = Self::with_panels(width, height, Vec::new());
        area.split_columns(count);
        area
    }

    pub fn with_panels(width: i32, height: i32, panels: Vec<Rect>) -> Self {
        Self {
            origin: Point::default(),
            width,
            height,
            panels,
            pointer: None,
            drop_location: DropLocation::None,
            repaint_requested: false,
        }
    }

    /// Re-split into `count` equal columns, keeping at least one panel
    pub fn split_columns(&mut self, count: usize) {
        let count = count.max(1) as i32;
        let column = self.width / count;
        self.panels = (0..count)
            .map(|i| {
                let x = i * column;
                // Last column absorbs the rounding remainder
                let w = if i == count - 1 { self.width - x } else { column };
                Rect::new(x, 0, w, self.height)
            })
            .collect();
    }

    /// Resize the area, re-splitting the panels evenly
    pub fn resize(&mut self, width: i32, height: i32) {
        let count = self.panels.len();
        self.width = width;
        self.height = height;
        self.split_columns(count);
    }

    pub fn panels(&self) -> &[Rect] {
        &self.panels
    }

    /// Track the pointer in screen coordinates
    pub fn set_pointer(&mut self, global: Point) {
        self.pointer = Some(self.map_from_global(global));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn drop_location(&self) -> DropLocation {
        self.drop_location
    }

    /// Returns and resets the pending repaint flag
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
}

impl IndicatorHost for DockArea {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn hovered_frame_rect(&self) -> Option<Rect> {
        let pointer = self.pointer?;
        self.panels.iter().copied().find(|r| r.contains(pointer))
    }

    fn container_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn map_from_global(&self, global: Point) -> Point {
        global - self.origin
    }

    fn set_current_drop_location(&mut self, location: DropLocation) {
        self.drop_location = location;
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }
}
