//! The indicator overlay and its host seam

use crate::config::{IndicatorConfig, DEFAULT_DRAGGED_WINDOW_OPACITY};
use crate::geometry::{Point, Polygon, Rect};
use crate::view::{draw_segments, Frame};

use super::location::DropLocation;
use super::registry::SegmentRegistry;

/// What the overlay needs from the drop area and drag session it sits on
pub trait IndicatorHost {
    /// Number of panels currently in the container
    fn panel_count(&self) -> usize;

    /// Bounds of the panel under the pointer, `None` when nothing is hovered
    fn hovered_frame_rect(&self) -> Option<Rect>;

    /// The overlay's own bounds in local coordinates
    fn container_rect(&self) -> Rect;

    /// Convert a screen position to local overlay coordinates
    fn map_from_global(&self, global: Point) -> Point;

    /// Publish the hit-test result for the drag session to act on
    fn set_current_drop_location(&mut self, location: DropLocation);

    /// Ask the window system for a repaint; coalescing is the host's job
    fn request_repaint(&mut self) {}
}

/// Segmented drop indicators drawn over a drop area during a drag
pub struct SegmentedIndicators<H: IndicatorHost> {
    host: H,
    segments: SegmentRegistry,
    hovered_point: Option<Point>,
    current_location: DropLocation,
}

impl<H: IndicatorHost> SegmentedIndicators<H> {
    /// Create the overlay
    ///
    /// Indicators sit below the dragged window, so when the application has not
    /// chosen a dragged-window opacity one is set here to keep them visible.
    pub fn new(host: H, config: &mut IndicatorConfig) -> Self {
        config.try_set_default_dragged_window_opacity(DEFAULT_DRAGGED_WINDOW_OPACITY);
        Self {
            host,
            segments: SegmentRegistry::default(),
            hovered_point: None,
            current_location: DropLocation::None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn segments(&self) -> &SegmentRegistry {
        &self.segments
    }

    pub fn segment(&self, location: DropLocation) -> Option<&Polygon> {
        self.segments.get(location)
    }

    pub fn hovered_point(&self) -> Option<Point> {
        self.hovered_point
    }

    /// Last location published to the host
    pub fn current_drop_location(&self) -> DropLocation {
        self.current_location
    }

    /// Pointer moved to `global` during a drag
    ///
    /// Maps the point to local space, rebuilds the segments, hit-tests and
    /// publishes the result to the host.
    pub fn hover(&mut self, global: Point) -> DropLocation {
        let local = self.host.map_from_global(global);
        self.hovered_point = Some(local);
        self.update_segments();

        let location = self.drop_location_for_pos(local);
        tracing::trace!(?global, ?local, %location, "hover");
        self.publish(location);
        location
    }

    /// Pointer left the overlay or the drag ended
    pub fn remove_hover(&mut self) {
        self.hovered_point = None;
        self.publish(DropLocation::None);
        self.host.request_repaint();
    }

    /// Container geometry changed
    pub fn resize(&mut self) {
        self.update_segments();
    }

    /// Rebuild every segment from the host's current geometry
    pub fn update_segments(&mut self) {
        self.segments = SegmentRegistry::build(
            self.host.container_rect(),
            self.host.hovered_frame_rect(),
            self.host.panel_count(),
        );
        self.host.request_repaint();
    }

    /// Hit-test `local` against the current segments without side effects
    pub fn drop_location_for_pos(&self, local: Point) -> DropLocation {
        self.segments.location_for_point(local)
    }

    pub fn paint(&self, frame: &mut Frame) {
        draw_segments(frame, &self.segments, self.hovered_point);
    }

    fn publish(&mut self, location: DropLocation) {
        if location != self.current_location {
            tracing::debug!(from = %self.current_location, to = %location, "drop location changed");
        }
        self.current_location = location;
        self.host.set_current_drop_location(location);
    }
}
