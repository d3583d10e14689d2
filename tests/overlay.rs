//! Hover handling and painting through the overlay

mod common;

use common::{FakeHost, CONTAINER};
use segdrop::view::{Frame, SEGMENT_FILL, SEGMENT_HIGHLIGHT};
use segdrop::{DropLocation, IndicatorConfig, Point, Rect, SegmentedIndicators};

fn overlay(hovered: Option<Rect>, panel_count: usize) -> SegmentedIndicators<FakeHost> {
    let mut config = IndicatorConfig::default();
    SegmentedIndicators::new(FakeHost::new(CONTAINER, hovered, panel_count), &mut config)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_defaults_dragged_window_opacity() {
    let mut config = IndicatorConfig::default();
    let _overlay = SegmentedIndicators::new(FakeHost::new(CONTAINER, None, 1), &mut config);
    assert_eq!(config.dragged_window_opacity, Some(0.7));
}

#[test]
fn test_new_keeps_application_opacity() {
    let mut config = IndicatorConfig {
        dragged_window_opacity: Some(1.0),
    };
    let _overlay = SegmentedIndicators::new(FakeHost::new(CONTAINER, None, 1), &mut config);
    assert_eq!(config.dragged_window_opacity, Some(1.0));
}

#[test]
fn test_no_segments_before_first_update() {
    let overlay = overlay(None, 1);
    assert!(overlay.segments().is_empty());
    assert_eq!(overlay.current_drop_location(), DropLocation::None);
    assert_eq!(overlay.hovered_point(), None);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_publishes_location() {
    let mut overlay = overlay(Some(Rect::new(100, 100, 200, 150)), 2);
    let location = overlay.hover(Point::new(200, 175));

    assert_eq!(location, DropLocation::Center);
    assert_eq!(overlay.current_drop_location(), DropLocation::Center);
    assert_eq!(overlay.host().last_published(), Some(DropLocation::Center));
    assert!(overlay.host().repaints > 0);
}

#[test]
fn test_hover_maps_global_to_local() {
    let mut host = FakeHost::new(CONTAINER, None, 1);
    host.origin = Point::new(1000, 500);
    let mut config = IndicatorConfig::default();
    let mut overlay = SegmentedIndicators::new(host, &mut config);

    let location = overlay.hover(Point::new(1005, 800));
    assert_eq!(overlay.hovered_point(), Some(Point::new(5, 300)));
    assert_eq!(location, DropLocation::OuterLeft);
}

#[test]
fn test_hover_rebuilds_from_current_host_geometry() {
    let mut overlay = overlay(None, 1);
    overlay.hover(Point::new(400, 300));
    assert!(!overlay.segments().contains(DropLocation::Center));

    overlay.host_mut().hovered = Some(Rect::new(300, 200, 200, 200));
    overlay.hover(Point::new(400, 300));
    assert!(overlay.segments().contains(DropLocation::Center));
    // Single panel hovered: no outer ring
    assert!(!overlay.segments().contains(DropLocation::OuterLeft));
}

#[test]
fn test_repeated_update_is_idempotent() {
    let mut overlay = overlay(Some(Rect::new(100, 100, 200, 150)), 2);
    overlay.update_segments();
    let first = overlay.segments().clone();
    overlay.update_segments();
    assert_eq!(&first, overlay.segments());
}

#[test]
fn test_drop_location_for_pos_has_no_side_effects() {
    let mut overlay = overlay(Some(Rect::new(100, 100, 200, 150)), 2);
    overlay.hover(Point::new(200, 175));
    let published = overlay.host().published.len();

    assert_eq!(
        overlay.drop_location_for_pos(Point::new(5, 300)),
        DropLocation::OuterLeft
    );
    assert_eq!(overlay.current_drop_location(), DropLocation::Center);
    assert_eq!(overlay.hovered_point(), Some(Point::new(200, 175)));
    assert_eq!(overlay.host().published.len(), published);
}

#[test]
fn test_remove_hover_clears_location() {
    let mut overlay = overlay(None, 1);
    overlay.hover(Point::new(5, 300));
    overlay.remove_hover();

    assert_eq!(overlay.hovered_point(), None);
    assert_eq!(overlay.current_drop_location(), DropLocation::None);
    assert_eq!(overlay.host().last_published(), Some(DropLocation::None));
}

#[test]
fn test_resize_picks_up_new_container() {
    let mut overlay = overlay(None, 1);
    overlay.resize();
    let before = overlay.segment(DropLocation::OuterRight).unwrap().bounding_rect();

    overlay.host_mut().container = Rect::new(0, 0, 1024, 768);
    overlay.resize();
    let after = overlay.segment(DropLocation::OuterRight).unwrap().bounding_rect();

    assert_eq!(before.right(), 799);
    assert_eq!(after.right(), 1023);
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn test_paint_highlights_hovered_segment_only() {
    let mut overlay = overlay(None, 1);
    overlay.hover(Point::new(20, 300));

    let mut buffer = vec![0u32; 800 * 600];
    let mut frame = Frame::new(&mut buffer, 800, 600);
    overlay.paint(&mut frame);

    // Deep inside the outer left wedge, away from its outline
    assert_eq!(frame.get_pixel(20, 300), SEGMENT_HIGHLIGHT);
    // Inside the outer top wedge
    let top = frame.get_pixel(400, 25);
    assert_ne!(top, SEGMENT_HIGHLIGHT);
    assert_ne!(top, 0);
    // Container middle is not covered by any segment
    assert_eq!(frame.get_pixel(400, 300), 0);
}

#[test]
fn test_paint_without_hover_uses_idle_fill() {
    let mut overlay = overlay(None, 1);
    overlay.resize();

    let mut buffer = vec![0xFF000000u32; 800 * 600];
    let mut frame = Frame::new(&mut buffer, 800, 600);
    overlay.paint(&mut frame);

    let expected = segdrop::view::blend_colors(0xFF000000, SEGMENT_FILL, 0xC8 as f32 / 255.0);
    assert_eq!(frame.get_pixel(20, 300), expected);
}

#[test]
fn test_paint_and_hit_test_agree() {
    let mut overlay = overlay(Some(Rect::new(0, 0, 400, 600)), 2);
    let location = overlay.hover(Point::new(200, 300));
    assert_eq!(location, DropLocation::Center);

    let highlighted: Vec<DropLocation> = overlay
        .segments()
        .iter()
        .filter(|(_, polygon)| polygon.contains_point(Point::new(200, 300)))
        .map(|(location, _)| location)
        .collect();
    assert_eq!(highlighted, vec![DropLocation::Center]);
}

#[test]
fn test_overlapping_segments_are_highlighted_together() {
    // The untrimmed inner left wedge lies over the outer left wedge. Only the
    // inner one is published, but both contain the pointer and both light up.
    let mut overlay = overlay(Some(Rect::new(20, 100, 300, 300)), 2);
    let location = overlay.hover(Point::new(30, 250));
    assert_eq!(location, DropLocation::Left);

    let mut buffer = vec![0u32; 800 * 600];
    let mut frame = Frame::new(&mut buffer, 800, 600);
    overlay.paint(&mut frame);

    // Inner left only
    assert_eq!(frame.get_pixel(65, 250), SEGMENT_HIGHLIGHT);
    // Outer left only
    assert_eq!(frame.get_pixel(10, 300), SEGMENT_HIGHLIGHT);
    // Outer top is not under the pointer
    assert_ne!(frame.get_pixel(400, 25), SEGMENT_HIGHLIGHT);
}
