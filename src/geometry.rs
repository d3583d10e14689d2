//! Integer geometry primitives for the indicator overlay
//!
//! All coordinates are local overlay pixels. `Rect` edges are inclusive:
//! `right()` and `bottom()` name the last pixel column/row inside the rect.

use std::ops::{Add, Sub};

/// A point in local overlay coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle with inclusive right/bottom edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect spanning two inclusive corner coordinates
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left + 1, bottom - top + 1)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Last pixel column inside the rect
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last pixel row inside the rect
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// A rect with no area is invalid (e.g. "nothing hovered")
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Midpoint of the inclusive edges, truncated toward zero
    pub fn center(&self) -> Point {
        let cx = (i64::from(self.left()) + i64::from(self.right())) / 2;
        let cy = (i64::from(self.top()) + i64::from(self.bottom())) / 2;
        Point::new(cx as i32, cy as i32)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// A closed polygon outline
///
/// The last point connects back to the first. An empty polygon stands for
/// "no segment here".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterate the closed outline as `(start, end)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Smallest rect covering every vertex, `Rect::default()` when empty
    pub fn bounding_rect(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::from_edges(min_x, min_y, max_x, max_y)
    }

    /// Even-odd containment test
    ///
    /// Casts a ray toward +x and counts edge crossings. Edges are half-open in
    /// y (lower endpoint included) and a point lying exactly on an edge does not
    /// count that edge as crossed, so a point on a shared boundary belongs to
    /// the polygon on its right/lower side. This is the only containment rule
    /// in the crate: hit-testing and paint highlighting both go through it.
    pub fn contains_point(&self, p: Point) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) == (b.y > p.y) {
                continue;
            }
            // p.x < a.x + (p.y - a.y) * dx / dy, multiplied through by dy
            let dx = i64::from(b.x) - i64::from(a.x);
            let dy = i64::from(b.y) - i64::from(a.y);
            let lhs = (i64::from(p.x) - i64::from(a.x)) * dy;
            let rhs = (i64::from(p.y) - i64::from(a.y)) * dx;
            let left_of_edge = if dy > 0 { lhs < rhs } else { lhs > rhs };
            if left_of_edge {
                inside = !inside;
            }
        }
        inside
    }

    /// True for a closed outline of at least three distinct vertices whose
    /// non-adjacent edges never touch
    pub fn is_simple(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if self.points[i] == self.points[j] {
                    return false;
                }
            }
        }

        let edges: Vec<(Point, Point)> = self.edges().collect();
        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    continue;
                }
                if segments_intersect(edges[i], edges[j]) {
                    return false;
                }
            }
        }
        true
    }
}

fn orientation(a: Point, b: Point, c: Point) -> i64 {
    let v = (i64::from(b.x) - i64::from(a.x)) * (i64::from(c.y) - i64::from(a.y))
        - (i64::from(b.y) - i64::from(a.y)) * (i64::from(c.x) - i64::from(a.x));
    v.signum()
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segment intersection, touching endpoints included
fn segments_intersect((p1, p2): (Point, Point), (q1, q2): (Point, Point)) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, p2, q2))
        || (o3 == 0 && on_segment(q1, q2, p1))
        || (o4 == 0 && on_segment(q1, q2, p2))
}
