//! Drop location → polygon registry
//!
//! The registry is derived state. It is rebuilt from scratch out of the
//! container rect, the hovered panel rect and the panel count; nothing is
//! carried over between builds.

use std::collections::BTreeMap;

use crate::geometry::{Point, Polygon, Rect};

use super::location::DropLocation;
use super::segments::build_segments;

/// Ordered mapping from drop location to its hit-region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentRegistry {
    segments: BTreeMap<DropLocation, Polygon>,
}

impl SegmentRegistry {
    /// Compute the segments for the current drag state
    ///
    /// Inner segments follow the hovered panel. Outer segments follow the
    /// container and appear whenever there is more than one panel, or when no
    /// panel is hovered. When both rings are shown the inner ring is trimmed
    /// away from the container boundary; the outer ring never is.
    pub fn build(container: Rect, hovered: Option<Rect>, panel_count: usize) -> Self {
        let mut registry = Self::default();

        let hovered = hovered.filter(Rect::is_valid);
        let needs_inner = hovered.is_some();
        let needs_outer = panel_count > 1 || !needs_inner;

        if let Some(hovered) = hovered {
            if let Some(set) = build_segments(hovered, container, needs_outer) {
                let (edges, center) = set.into_parts();
                for (i, polygon) in edges.into_iter().enumerate() {
                    if let Some(location) = DropLocation::inner_edge(i) {
                        registry.insert(location, polygon);
                    }
                }
                registry.insert(DropLocation::Center, center);
            }
        }

        if needs_outer {
            if let Some(set) = build_segments(container, container, false) {
                let (edges, _center) = set.into_parts();
                for (i, polygon) in edges.into_iter().enumerate() {
                    if let Some(location) = DropLocation::outer_edge(i) {
                        registry.insert(location, polygon);
                    }
                }
            }
        }

        tracing::debug!(
            ?container,
            ?hovered,
            panel_count,
            needs_inner,
            needs_outer,
            segments = registry.len(),
            "rebuilt drop segments"
        );

        registry
    }

    fn insert(&mut self, location: DropLocation, polygon: Polygon) {
        if location.is_none() || polygon.is_empty() {
            return;
        }
        self.segments.insert(location, polygon);
    }

    /// The polygon for `location`, if that segment is present
    pub fn get(&self, location: DropLocation) -> Option<&Polygon> {
        self.segments.get(&location)
    }

    pub fn contains(&self, location: DropLocation) -> bool {
        self.segments.contains_key(&location)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Present segments in draw/priority order
    pub fn iter(&self) -> impl Iterator<Item = (DropLocation, &Polygon)> {
        DropLocation::ALL
            .iter()
            .filter_map(|&location| self.get(location).map(|polygon| (location, polygon)))
    }

    /// First segment in priority order containing `point`
    ///
    /// Inner locations win over outer ones. Returns [`DropLocation::None`] when
    /// no segment contains the point.
    pub fn location_for_point(&self, point: Point) -> DropLocation {
        self.iter()
            .find(|(_, polygon)| polygon.contains_point(point))
            .map(|(location, _)| location)
            .unwrap_or(DropLocation::None)
    }
}
