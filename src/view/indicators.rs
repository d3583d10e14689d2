//! Painting the drop segments

use crate::geometry::Point;
use crate::indicator::{SegmentRegistry, SEGMENT_PEN_WIDTH};

use super::frame::Frame;

/// Translucent blue-gray for idle segments (ARGB)
pub const SEGMENT_FILL: u32 = 0xC8BBD5EE;
/// Solid accent for the segment under the pointer (ARGB)
pub const SEGMENT_HIGHLIGHT: u32 = 0xFF3574C5;
pub const SEGMENT_STROKE: u32 = 0xFF000000;

/// Draw every present segment in enumeration order
///
/// The highlighted segment is recomputed here from `hovered` with the same
/// containment test the hit tester uses, not taken from the last hit result.
pub fn draw_segments(frame: &mut Frame, segments: &SegmentRegistry, hovered: Option<Point>) {
    for (location, polygon) in segments.iter() {
        let highlighted = hovered.is_some_and(|p| polygon.contains_point(p));
        let fill = if highlighted {
            SEGMENT_HIGHLIGHT
        } else {
            SEGMENT_FILL
        };
        tracing::trace!(%location, highlighted, "draw segment");

        frame.fill_polygon(polygon, fill);
        frame.stroke_polygon(polygon, SEGMENT_PEN_WIDTH, SEGMENT_STROKE);
    }
}
