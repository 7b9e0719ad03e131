use image::Rgba;

/// Bit `i` set means square index `i` (mod 32) is dark.
///
/// One 32-bit word covers four columns of eight squares; the pattern is
/// the same for both halves of the board.
pub const SHADE_MASK: u32 = 0xAA55AA55;

/// Dark squares.
pub const PURPLE: Rgba<u8> = Rgba([0x71, 0x03, 0x8A, 0xFF]);

/// Light squares.
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// Display shade of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareShade {
    Light,
    Dark,
}

impl SquareShade {
    /// Pixel value used to paint squares of this shade.
    #[inline]
    pub const fn rgba(self) -> Rgba<u8> {
        match self {
            SquareShade::Light => WHITE,
            SquareShade::Dark => PURPLE,
        }
    }
}

/// Shade of the square with the given index (`column * 8 + row`).
///
/// Any index is accepted; only its value mod 32 matters.
#[inline]
pub const fn shade_of(square_index: usize) -> SquareShade {
    if (SHADE_MASK >> (square_index % 32)) & 1 != 0 {
        SquareShade::Dark
    } else {
        SquareShade::Light
    }
}
