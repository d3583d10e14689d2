//! Segment geometry for a single rectangle
//!
//! A rect becomes four wedge-shaped edge segments that meet along the
//! diagonals, plus a small "tabbed panel" outline in the middle:
//!
//! ```text
//!   +-----------------------+
//!   |\         top         /|
//!   | +-------------------+ |
//!   |l|     __            |r|
//!   |e|    |  |_______    |i|
//!   |f|    |  center  |   |g|
//!   |t|    |__________|   |h|
//!   | +-------------------+ |
//!   |/        bottom       \|
//!   +-----------------------+
//! ```

use crate::geometry::{Point, Polygon, Rect};

/// Depth of the edge wedges and the inset applied at the overlay boundary
pub const SEGMENT_GIRTH: i32 = 50;

/// Stroke width used when painting segment outlines
pub const SEGMENT_PEN_WIDTH: i32 = 4;

/// Rects narrower or shorter than this (after trimming) get no edge wedges
pub const MIN_SEGMENT_SPAN: i32 = 12;

/// Smallest inner area left between opposing wedges
const MIN_CENTER_SPAN: i32 = 8;

/// Below this span not even the center indicator fits
const MIN_INDICATOR_SPAN: i32 = 4;

const MAX_INDICATOR_WIDTH: i32 = 300;
const MAX_INDICATOR_HEIGHT: i32 = 160;
const MIN_INDICATOR_WIDTH: i32 = 10;
const MIN_INDICATOR_HEIGHT: i32 = 2;
/// Horizontal room kept free around the center indicator
const INDICATOR_MARGIN: i32 = 100;
const INDICATOR_ASPECT: f64 = 0.60;
const TAB_WIDTH_RATIO: f64 = 0.267;
const TAB_HEIGHT_RATIO: f64 = 0.187;

/// The five segments built for one rect
///
/// The edge wedges are empty when the rect only has room for the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSet {
    pub left: Polygon,
    pub top: Polygon,
    pub right: Polygon,
    pub bottom: Polygon,
    pub center: Polygon,
}

impl SegmentSet {
    /// Edge wedges in left, top, right, bottom order
    pub fn edges(&self) -> [&Polygon; 4] {
        [&self.left, &self.top, &self.right, &self.bottom]
    }

    fn center_only(center: Polygon) -> Self {
        Self {
            left: Polygon::empty(),
            top: Polygon::empty(),
            right: Polygon::empty(),
            bottom: Polygon::empty(),
            center,
        }
    }

    /// Consume the set, returning the edges (left, top, right, bottom) and the center
    pub fn into_parts(self) -> ([Polygon; 4], Polygon) {
        ([self.left, self.top, self.right, self.bottom], self.center)
    }
}

/// Build the edge wedges and center indicator for `rect`
///
/// `bounds` is the overlay's own rect. With `use_offset`, each edge of `rect`
/// that lies on the matching edge of `bounds` is pulled inward by
/// [`SEGMENT_GIRTH`], leaving room for the outer ring.
///
/// A trimmed rect spanning less than [`MIN_SEGMENT_SPAN`] keeps only its
/// center indicator. Returns `None` when not even that fits.
pub fn build_segments(rect: Rect, bounds: Rect, use_offset: bool) -> Option<SegmentSet> {
    let half_pen = SEGMENT_PEN_WIDTH / 2;
    let girth = SEGMENT_GIRTH;

    let top = if use_offset && rect.top() == bounds.top() {
        rect.top() + girth
    } else {
        rect.top()
    };
    let left = if use_offset && rect.left() == bounds.left() {
        rect.left() + girth
    } else {
        rect.left()
    };
    let right = if use_offset && rect.right() == bounds.right() {
        rect.right() - girth
    } else {
        rect.right()
    };
    let bottom = if use_offset && rect.bottom() == bounds.bottom() {
        rect.bottom() - girth
    } else {
        rect.bottom()
    };

    let top_left = Point::new(left + half_pen, top + half_pen);
    let top_right = Point::new(right, top + half_pen);
    let bottom_left = Point::new(left + half_pen, bottom);
    let bottom_right = Point::new(right, bottom);

    let span_x = top_right.x - top_left.x;
    let span_y = bottom_left.y - top_left.y;
    if span_x < MIN_INDICATOR_SPAN || span_y < MIN_INDICATOR_SPAN {
        tracing::trace!(?rect, use_offset, span_x, span_y, "rect too small for segments");
        return None;
    }
    if span_x < MIN_SEGMENT_SPAN || span_y < MIN_SEGMENT_SPAN {
        tracing::trace!(?rect, use_offset, span_x, span_y, "rect too small for edge wedges");
        let inner = Rect::from_edges(top_left.x, top_left.y, bottom_right.x, bottom_right.y);
        let set = SegmentSet::center_only(center_indicator(inner));
        debug_assert!(set.center.is_simple());
        return Some(set);
    }

    // Opposing wedges must not meet, or the inner boundary folds over itself
    let depth = girth.min((span_x.min(span_y) - MIN_CENTER_SPAN) / 2);

    let inner_top_left = top_left + Point::new(depth, depth);
    let inner_top_right = top_right + Point::new(-depth, depth);
    let inner_bottom_left = bottom_left + Point::new(depth, -depth);
    let inner_bottom_right = bottom_right + Point::new(-depth, -depth);

    let left_wedge = Polygon::new(vec![
        top_left,
        bottom_left,
        inner_bottom_left,
        inner_top_left,
    ]);
    let top_wedge = Polygon::new(vec![top_left, top_right, inner_top_right, inner_top_left]);
    let right_wedge = Polygon::new(vec![
        top_right,
        bottom_right,
        inner_bottom_right,
        inner_top_right,
    ]);
    let bottom_wedge = Polygon::new(vec![
        bottom_left,
        bottom_right,
        inner_bottom_right,
        inner_bottom_left,
    ]);

    let inner = Rect::from_edges(
        inner_top_left.x,
        inner_top_left.y,
        inner_bottom_right.x,
        inner_bottom_right.y,
    );
    let center = center_indicator(inner);

    let set = SegmentSet {
        left: left_wedge,
        top: top_wedge,
        right: right_wedge,
        bottom: bottom_wedge,
        center,
    };
    debug_assert!(set.edges().iter().all(|p| p.is_simple()));
    debug_assert!(set.center.is_simple());
    Some(set)
}

/// Tabbed-panel outline centered in `inner`, kept strictly inside it
fn center_indicator(inner: Rect) -> Polygon {
    let max_width = inner.width;
    let center = inner.center();

    // One pixel of clearance on each side keeps the outline off the wedges
    let avail_width = inner.width - 1 - 2;
    let avail_height = inner.height - 1 - 2;

    let width = (max_width - INDICATOR_MARGIN).clamp(
        MIN_INDICATOR_WIDTH.min(avail_width),
        MAX_INDICATOR_WIDTH.min(avail_width),
    );
    let height = ((f64::from(width) * INDICATOR_ASPECT) as i32)
        .min(MAX_INDICATOR_HEIGHT)
        .clamp(MIN_INDICATOR_HEIGHT, avail_height);

    let rect_left = center.x - width / 2;
    let rect_right = center.x + width / 2;
    let rect_top = center.y - height / 2;
    let rect_bottom = center.y + height / 2;

    let tab_width =
        ((f64::from(width) * TAB_WIDTH_RATIO) as i32).clamp(1, rect_right - rect_left - 1);
    let tab_height =
        ((f64::from(height) * TAB_HEIGHT_RATIO) as i32).clamp(1, rect_bottom - rect_top - 1);

    Polygon::new(vec![
        Point::new(rect_left, rect_top),
        Point::new(rect_left + tab_width, rect_top),
        Point::new(rect_left + tab_width, rect_top + tab_height),
        Point::new(rect_right, rect_top + tab_height),
        Point::new(rect_right, rect_bottom),
        Point::new(rect_left, rect_bottom),
    ])
}
