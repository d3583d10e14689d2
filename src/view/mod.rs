//! View module - software rendering of the indicator overlay

pub mod frame;
pub mod indicators;

pub use frame::{blend_colors, Frame};
pub use indicators::{draw_segments, SEGMENT_FILL, SEGMENT_HIGHLIGHT, SEGMENT_STROKE};
