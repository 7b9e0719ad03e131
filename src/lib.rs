//! Render a chessboard, with pieces cut from a sprite sheet, to a PNG.
//!
//! The pipeline is linear: squares are shaded from a fixed bitmask
//! ([`shade`]), sprites are located in the sheet by piece and color
//! ([`sprite`]), squares in algebraic notation are turned into pixel
//! rectangles ([`notation`]) and the [`compositor`] merges it all into one
//! canvas that [`output`] encodes.

pub mod compositor;
pub mod config;
pub mod error;
pub mod notation;
pub mod output;
pub mod placement;
pub mod rect;
pub mod shade;
pub mod sprite;

/// Squares per side.
pub const BOARD_SIZE: u32 = 8;

pub use config::RenderConfig;
pub use error::RenderError;
pub use notation::{BoardLayout, parse_square, square_rect};
pub use placement::{Placement, parse_placements, placements_from_fen};
pub use rect::Rect;
pub use shade::{SquareShade, shade_of};
pub use sprite::{SpriteSheet, sprite_rect};
