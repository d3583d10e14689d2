//! Drop location identifiers

use serde::{Deserialize, Serialize};

/// Where a dragged panel would land if released now
///
/// Variant order is the draw order and the hit-test priority: inner locations
/// (relative to the hovered panel) come before outer ones (relative to the
/// whole container).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DropLocation {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
    Center,
    OuterLeft,
    OuterTop,
    OuterRight,
    OuterBottom,
}

impl DropLocation {
    pub const FIRST: DropLocation = DropLocation::Left;
    pub const LAST: DropLocation = DropLocation::OuterBottom;

    /// Every real location, `FIRST..=LAST`, in draw order
    pub const ALL: [DropLocation; 9] = [
        DropLocation::Left,
        DropLocation::Top,
        DropLocation::Right,
        DropLocation::Bottom,
        DropLocation::Center,
        DropLocation::OuterLeft,
        DropLocation::OuterTop,
        DropLocation::OuterRight,
        DropLocation::OuterBottom,
    ];

    const INNER_EDGES: [DropLocation; 4] = [
        DropLocation::Left,
        DropLocation::Top,
        DropLocation::Right,
        DropLocation::Bottom,
    ];

    const OUTER_EDGES: [DropLocation; 4] = [
        DropLocation::OuterLeft,
        DropLocation::OuterTop,
        DropLocation::OuterRight,
        DropLocation::OuterBottom,
    ];

    /// Inner edge by index: 0 = left, 1 = top, 2 = right, 3 = bottom
    pub fn inner_edge(index: usize) -> Option<DropLocation> {
        Self::INNER_EDGES.get(index).copied()
    }

    /// Outer edge by index: 0 = left, 1 = top, 2 = right, 3 = bottom
    pub fn outer_edge(index: usize) -> Option<DropLocation> {
        Self::OUTER_EDGES.get(index).copied()
    }

    /// Locations derived from the hovered panel's rect
    pub fn is_inner(&self) -> bool {
        matches!(
            self,
            DropLocation::Left
                | DropLocation::Top
                | DropLocation::Right
                | DropLocation::Bottom
                | DropLocation::Center
        )
    }

    /// Locations derived from the container rect
    pub fn is_outer(&self) -> bool {
        matches!(
            self,
            DropLocation::OuterLeft
                | DropLocation::OuterTop
                | DropLocation::OuterRight
                | DropLocation::OuterBottom
        )
    }

    pub fn is_none(&self) -> bool {
        *self == DropLocation::None
    }

    pub fn name(&self) -> &'static str {
        match self {
            DropLocation::None => "none",
            DropLocation::Left => "left",
            DropLocation::Top => "top",
            DropLocation::Right => "right",
            DropLocation::Bottom => "bottom",
            DropLocation::Center => "center",
            DropLocation::OuterLeft => "outer-left",
            DropLocation::OuterTop => "outer-top",
            DropLocation::OuterRight => "outer-right",
            DropLocation::OuterBottom => "outer-bottom",
        }
    }
}

impl std::fmt::Display for DropLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_spans_first_to_last_in_order() {
        assert_eq!(DropLocation::ALL[0], DropLocation::FIRST);
        assert_eq!(DropLocation::ALL[8], DropLocation::LAST);
        assert!(DropLocation::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(!DropLocation::ALL.contains(&DropLocation::None));
    }

    #[test]
    fn test_inner_before_outer() {
        let last_inner = DropLocation::ALL.iter().rposition(|l| l.is_inner());
        let first_outer = DropLocation::ALL.iter().position(|l| l.is_outer());
        assert!(last_inner < first_outer);
    }

    #[test]
    fn test_serde_names_match_display() {
        for location in DropLocation::ALL {
            let yaml = serde_yaml::to_string(&location).unwrap();
            assert_eq!(yaml.trim(), location.name());
        }
    }

    #[test]
    fn test_edge_lookup() {
        assert_eq!(DropLocation::inner_edge(2), Some(DropLocation::Right));
        assert_eq!(DropLocation::outer_edge(3), Some(DropLocation::OuterBottom));
        assert_eq!(DropLocation::outer_edge(4), None);
    }
}
