use image::{RgbaImage, imageops};

use crate::BOARD_SIZE;
use crate::notation::BoardLayout;
use crate::placement::Placement;
use crate::shade::shade_of;
use crate::sprite::SpriteSheet;

/// Paint the 64 board squares onto a fresh canvas.
///
/// Square `(column, row)` gets the shade of index `column * 8 + row`, so a
/// pixel `(x, y)` ends up with `shade_of((x / sq) * 8 + y / sq)`.
pub fn paint_board(layout: &BoardLayout) -> RgbaImage {
    let size = layout.canvas_size();
    let sq = layout.square_size();
    let mut canvas = RgbaImage::new(size, size);

    for column in 0..BOARD_SIZE {
        for row in 0..BOARD_SIZE {
            let color = shade_of((column * BOARD_SIZE + row) as usize).rgba();
            for y in row * sq..(row + 1) * sq {
                for x in column * sq..(column + 1) * sq {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
    }
    canvas
}

/// Composite one sprite over its square ("over" alpha blending).
pub fn draw_piece(
    canvas: &mut RgbaImage,
    layout: &BoardLayout,
    sheet: &SpriteSheet,
    placement: &Placement,
) {
    let dest = layout.piece_rect(placement.square);
    log::debug!(
        "drawing {:?} {:?} on {} at {}",
        placement.color,
        placement.role,
        placement.square,
        dest
    );
    let sprite = sheet.sprite(placement.role, placement.color).to_image();
    imageops::overlay(canvas, &sprite, i64::from(dest.x), i64::from(dest.y));
}

/// Paint the board and draw every placement, in order.
pub fn render(layout: &BoardLayout, sheet: &SpriteSheet, placements: &[Placement]) -> RgbaImage {
    let mut canvas = paint_board(layout);
    for placement in placements {
        draw_piece(&mut canvas, layout, sheet, placement);
    }
    canvas
}
