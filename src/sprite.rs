use std::io;
use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageReader, RgbaImage, SubImage};
use shakmaty::{Color, Role};

use crate::error::RenderError;
use crate::rect::Rect;

/// Edge length of one sprite cell, in pixels.
pub const SPRITE_SIZE: u32 = 60;

/// Column order of the sprite sheet.
pub const SHEET_ROLES: [Role; 6] = [
    Role::Queen,
    Role::King,
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Pawn,
];

/// Row order of the sprite sheet.
pub const SHEET_COLORS: [Color; 2] = [Color::Black, Color::White];

/// Parse a one-letter piece code (`q k r n b p`, any case).
///
/// The empty string is a pawn.
pub fn parse_role(code: &str) -> Result<Role, RenderError> {
    let lowered = code.to_lowercase();
    let mut chars = lowered.chars();
    let ch = match (chars.next(), chars.next()) {
        (None, _) => return Ok(Role::Pawn),
        (Some(ch), None) => ch,
        (Some(_), Some(_)) => return Err(RenderError::InvalidPiece(code.to_string())),
    };
    SHEET_ROLES
        .into_iter()
        .find(|role| role.char() == ch)
        .ok_or_else(|| RenderError::InvalidPiece(code.to_string()))
}

/// Parse a one-letter color code (`b w`, any case).
pub fn parse_color(code: &str) -> Result<Color, RenderError> {
    let lowered = code.to_lowercase();
    let mut chars = lowered.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => SHEET_COLORS
            .into_iter()
            .find(|color| color.char() == ch)
            .ok_or_else(|| RenderError::InvalidColor(code.to_string())),
        _ => Err(RenderError::InvalidColor(code.to_string())),
    }
}

/// Source rectangle of a piece within the sprite sheet.
pub const fn cell_rect(role: Role, color: Color) -> Rect {
    // Must agree with SHEET_ROLES / SHEET_COLORS.
    let column = match role {
        Role::Queen => 0,
        Role::King => 1,
        Role::Rook => 2,
        Role::Knight => 3,
        Role::Bishop => 4,
        Role::Pawn => 5,
    };
    let row = match color {
        Color::Black => 0,
        Color::White => 1,
    };
    Rect::new(
        column * SPRITE_SIZE,
        row * SPRITE_SIZE,
        SPRITE_SIZE,
        SPRITE_SIZE,
    )
}

/// Source rectangle for a piece code and color code, e.g. `("k", "w")`.
pub fn sprite_rect(piece: &str, color: &str) -> Result<Rect, RenderError> {
    let role = parse_role(piece)?;
    let color = parse_color(color)?;
    Ok(cell_rect(role, color))
}

/// Decoded sprite sheet: 6 columns (`q k r n b p`) by 2 rows (`b w`).
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Minimum sheet dimensions holding every cell.
    pub const MIN_WIDTH: u32 = SHEET_ROLES.len() as u32 * SPRITE_SIZE;
    pub const MIN_HEIGHT: u32 = SHEET_COLORS.len() as u32 * SPRITE_SIZE;

    /// Wrap an already decoded image.
    pub fn new(image: RgbaImage) -> Result<Self, RenderError> {
        let (width, height) = image.dimensions();
        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(RenderError::SpriteSheetTooSmall {
                width,
                height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }
        Ok(Self { image })
    }

    /// Load and decode a sprite sheet from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| io_error(path, source))?;
        let image = reader.decode().map_err(|source| RenderError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "loaded sprite sheet {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::new(image.into_rgba8())
    }

    /// Read-only view of one region of the sheet.
    ///
    /// Panics if `rect` reaches outside the sheet.
    pub fn view(&self, rect: Rect) -> SubImage<&RgbaImage> {
        self.image.view(rect.x, rect.y, rect.width, rect.height)
    }

    /// View of the cell holding the given piece.
    #[inline]
    pub fn sprite(&self, role: Role, color: Color) -> SubImage<&RgbaImage> {
        self.view(cell_rect(role, color))
    }
}

fn io_error(path: &Path, source: io::Error) -> RenderError {
    let path = PathBuf::from(path);
    if source.kind() == io::ErrorKind::NotFound {
        RenderError::FileNotFound { path }
    } else {
        RenderError::Io { path, source }
    }
}
