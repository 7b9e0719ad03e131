use std::path::PathBuf;

use shakmaty::{Color, Role, Square};

use crate::compositor;
use crate::error::RenderError;
use crate::notation::BoardLayout;
use crate::output::save_png;
use crate::placement::Placement;
use crate::sprite::SpriteSheet;

/// Default output edge length, in pixels.
pub const CANVAS_SIZE: u32 = 640;

/// Default sprite sheet location, relative to the working directory.
pub const SPRITE_SHEET_PATH: &str = "ChessPiecesArray.png";

/// Default output location, relative to the working directory.
pub const OUTPUT_PATH: &str = "image.png";

/// Everything one render needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub canvas_size: u32,
    pub sprite_sheet: PathBuf,
    pub output: PathBuf,
    pub placements: Vec<Placement>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            sprite_sheet: PathBuf::from(SPRITE_SHEET_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            placements: vec![Placement::new(Color::Black, Role::Knight, Square::A1)],
        }
    }
}

impl RenderConfig {
    /// Load the sprite sheet, composite the board and write the PNG.
    ///
    /// The layout is validated before any file is touched, and nothing is
    /// written unless every step before encoding succeeds.
    pub fn run(&self) -> Result<(), RenderError> {
        let layout = BoardLayout::new(self.canvas_size)?;
        let sheet = SpriteSheet::open(&self.sprite_sheet)?;
        let canvas = compositor::render(&layout, &sheet, &self.placements);
        save_png(&canvas, &self.output)
    }
}
