//! Segmented drop-zone indicators
//!
//! While a panel is dragged over a drop area, the overlay shows wedge-shaped
//! segments along the edges of the hovered panel (inner ring) and of the whole
//! container (outer ring), plus a center segment for tabbing into the hovered
//! panel. The segment under the pointer is the drop location.
//!
//! ## Architecture
//!
//! - `segments`: polygon geometry for one rect
//! - `SegmentRegistry`: location → polygon map, rebuilt on every change, and
//!   the hit tester
//! - `SegmentedIndicators`: hover handling and painting on top of an
//!   `IndicatorHost`

mod location;
mod overlay;
mod registry;
pub mod segments;

pub use location::DropLocation;
pub use overlay::{IndicatorHost, SegmentedIndicators};
pub use registry::SegmentRegistry;
pub use segments::{build_segments, SegmentSet, MIN_SEGMENT_SPAN, SEGMENT_GIRTH, SEGMENT_PEN_WIDTH};
