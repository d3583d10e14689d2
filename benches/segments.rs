//! Benchmarks for segment rebuilds and hit-testing
//!
//! Run with: cargo bench segments

use segdrop::view::Frame;
use segdrop::{DropLocation, Point, Rect, SegmentRegistry};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const CONTAINER: Rect = Rect::new(0, 0, 1920, 1080);

fn hovered() -> Option<Rect> {
    Some(Rect::new(480, 0, 960, 540))
}

// ============================================================================
// Registry rebuild (runs on every hover move)
// ============================================================================

#[divan::bench(args = [1, 2, 8])]
fn rebuild(panel_count: usize) {
    let registry = SegmentRegistry::build(
        divan::black_box(CONTAINER),
        divan::black_box(hovered()),
        panel_count,
    );
    divan::black_box(registry);
}

#[divan::bench]
fn rebuild_outer_only() {
    let registry = SegmentRegistry::build(divan::black_box(CONTAINER), None, 1);
    divan::black_box(registry);
}

// ============================================================================
// Hit-testing
// ============================================================================

#[divan::bench]
fn hit_test_sweep(bencher: divan::Bencher) {
    let registry = SegmentRegistry::build(CONTAINER, hovered(), 2);
    let points: Vec<Point> = (0..CONTAINER.height)
        .step_by(17)
        .flat_map(|y| (0..CONTAINER.width).step_by(23).map(move |x| Point::new(x, y)))
        .collect();

    bencher.bench_local(|| {
        points
            .iter()
            .filter(|&&p| registry.location_for_point(p) != DropLocation::None)
            .count()
    });
}

// ============================================================================
// Painting
// ============================================================================

#[divan::bench]
fn paint_full_hd(bencher: divan::Bencher) {
    let registry = SegmentRegistry::build(CONTAINER, hovered(), 2);
    let mut buffer = vec![0u32; (CONTAINER.width * CONTAINER.height) as usize];

    bencher.bench_local(|| {
        let mut frame = Frame::new(
            &mut buffer,
            CONTAINER.width as usize,
            CONTAINER.height as usize,
        );
        segdrop::view::draw_segments(&mut frame, &registry, Some(Point::new(960, 270)));
    });
}
