use shakmaty::{File, Rank, Square};

use crate::BOARD_SIZE;
use crate::error::RenderError;
use crate::rect::Rect;
use crate::sprite::SPRITE_SIZE;

/// Parse algebraic square notation like "e4" (case-insensitive).
///
/// A piece prefix must already have been stripped by the caller.
pub fn parse_square(notation: &str) -> Result<Square, RenderError> {
    let lowered = notation.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let [file, rank] = chars[..] else {
        return Err(RenderError::InvalidNotationLength(notation.to_string()));
    };

    let file = File::ALL.into_iter().find(|f| f.char() == file);
    let rank = Rank::ALL.into_iter().find(|r| r.char() == rank);
    match (file, rank) {
        (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
        _ => Err(RenderError::InvalidNotation(notation.to_string())),
    }
}

/// Pixel geometry of an 8×8 board drawn on a square canvas.
///
/// Rank 8 is the top row of the image and file a the left column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    canvas_size: u32,
    square_size: u32,
}

impl BoardLayout {
    /// Layout for a `canvas_size × canvas_size` image.
    ///
    /// The canvas must split into whole squares and every square must be
    /// able to hold a sprite.
    pub fn new(canvas_size: u32) -> Result<Self, RenderError> {
        if canvas_size % BOARD_SIZE != 0 {
            return Err(RenderError::InvalidLayout {
                canvas_size,
                reason: "must be a multiple of 8",
            });
        }
        let square_size = canvas_size / BOARD_SIZE;
        if square_size < SPRITE_SIZE {
            return Err(RenderError::InvalidLayout {
                canvas_size,
                reason: "squares are smaller than a sprite",
            });
        }
        Ok(Self {
            canvas_size,
            square_size,
        })
    }

    #[inline]
    pub const fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    #[inline]
    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Margin that centers a sprite inside its square.
    #[inline]
    pub const fn padding(&self) -> u32 {
        (self.square_size - SPRITE_SIZE) / 2
    }

    /// Column and row of a square, counted from the top-left of the image.
    pub fn cell(&self, square: Square) -> (u32, u32) {
        let column = square.file() as u32;
        let row = BOARD_SIZE - (square.rank() as u32 + 1);
        (column, row)
    }

    /// Full pixel area of a square.
    pub fn square_area(&self, square: Square) -> Rect {
        let (column, row) = self.cell(square);
        Rect::new(
            column * self.square_size,
            row * self.square_size,
            self.square_size,
            self.square_size,
        )
    }

    /// Destination of a sprite drawn on `square`, centered in the square.
    pub fn piece_rect(&self, square: Square) -> Rect {
        let area = self.square_area(square);
        let padding = self.padding();
        Rect::new(
            area.x + padding,
            area.y + padding,
            SPRITE_SIZE,
            SPRITE_SIZE,
        )
    }
}

/// Destination rectangle for a sprite on the square named by `notation`,
/// on a board whose squares are `square_pixel_size` pixels wide.
pub fn square_rect(notation: &str, square_pixel_size: u32) -> Result<Rect, RenderError> {
    let square = parse_square(notation)?;
    let layout = BoardLayout::new(square_pixel_size.saturating_mul(BOARD_SIZE))?;
    Ok(layout.piece_rect(square))
}
