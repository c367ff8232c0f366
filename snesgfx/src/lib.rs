//! SNES 4BPP sprite sheet transcoding.
//!
//! Covers the player sprite sheet of A Link to the Past: 896 tiles of 8x8
//! pixels laid out as a 128x448 sheet, four mail palettes of 15 colors each
//! and the two glove colors.
pub mod bitplane;
pub mod constants;
pub mod palette;
pub mod raster;
mod types;

pub use types::*;
