//! segdrop - segmented drop-zone indicators for docking layouts
//!
//! This crate computes the polygonal drop segments shown while a panel is
//! dragged over a dock area, hit-tests the pointer against them and paints
//! them into a software frame buffer.

pub mod config;
pub mod config_paths;
pub mod dock;
pub mod geometry;
pub mod indicator;
pub mod scenario;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::IndicatorConfig;
pub use dock::DockArea;
pub use geometry::{Point, Polygon, Rect};
pub use indicator::{DropLocation, IndicatorHost, SegmentRegistry, SegmentedIndicators};
