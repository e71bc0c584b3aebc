pub mod config;
pub mod geometry;
pub mod icon;
pub mod palette;
pub mod raster;

// Curated re-exports
pub use config::{IconConfig, IconTarget};
pub use geometry::{CellRect, GridLayout, PixelRect};
pub use icon::{create_icon, encode_png, icon_digest, render_icon, IconReport};
