use std::fs;
use std::path::{Path, PathBuf};

use chessboard_render::sprite::{SHEET_COLORS, SHEET_ROLES, SPRITE_SIZE};
use chessboard_render::{
    BoardLayout, Placement, RenderConfig, RenderError, SpriteSheet, parse_placements,
    placements_from_fen, shade_of,
};
use image::{Rgba, RgbaImage};
use shakmaty::{Color, Role, Square};
use tempfile::TempDir;

/// Helper: a distinct opaque color for every sheet cell.
fn cell_color(column: usize, row: usize) -> Rgba<u8> {
    Rgba([column as u8 * 40, row as u8 * 100, 7, 255])
}

/// Helper: write a sheet whose cells are solid `cell_color` blocks.
fn write_sheet(dir: &Path) -> PathBuf {
    let mut sheet = RgbaImage::new(SpriteSheet::MIN_WIDTH, SpriteSheet::MIN_HEIGHT);
    for (x, y, pixel) in sheet.enumerate_pixels_mut() {
        *pixel = cell_color((x / SPRITE_SIZE) as usize, (y / SPRITE_SIZE) as usize);
    }
    let path = dir.join("ChessPiecesArray.png");
    sheet.save(&path).expect("sheet should be writable");
    path
}

/// Helper: config rendering into `dir` with the given placements.
fn config_in(dir: &Path, placements: Vec<Placement>) -> RenderConfig {
    RenderConfig {
        canvas_size: 640,
        sprite_sheet: write_sheet(dir),
        output: dir.join("image.png"),
        placements,
    }
}

fn read_output(path: &Path) -> RgbaImage {
    image::open(path)
        .expect("output should decode")
        .into_rgba8()
}

fn sheet_position(role: Role, color: Color) -> (usize, usize) {
    let column = SHEET_ROLES.iter().position(|r| *r == role).unwrap();
    let row = SHEET_COLORS.iter().position(|c| *c == color).unwrap();
    (column, row)
}

// ---------------------------------------------------------------
// Empty board
// ---------------------------------------------------------------

#[test]
fn empty_board_has_64_uniform_squares() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), Vec::new());

    config.run().expect("render should succeed");
    let image = read_output(&config.output);

    assert_eq!(image.dimensions(), (640, 640));
    for column in 0..8u32 {
        for row in 0..8u32 {
            let expected = shade_of((column * 8 + row) as usize).rgba();
            // Sample the center and both far corners of every square.
            for (dx, dy) in [(40, 40), (0, 0), (79, 79)] {
                let pixel = *image.get_pixel(column * 80 + dx, row * 80 + dy);
                assert_eq!(pixel, expected, "square ({column}, {row})");
            }
        }
    }
}

// ---------------------------------------------------------------
// Pieces
// ---------------------------------------------------------------

#[test]
fn knight_on_a1_is_copied_from_its_cell() {
    let dir = TempDir::new().unwrap();
    let config = config_in(
        dir.path(),
        vec![Placement::parse("b", "na1").expect("valid placement")],
    );

    config.run().expect("render should succeed");
    let image = read_output(&config.output);

    let (column, row) = sheet_position(Role::Knight, Color::Black);
    assert_eq!(*image.get_pixel(10, 570), cell_color(column, row));
    assert_eq!(*image.get_pixel(69, 629), cell_color(column, row));
    // Padding keeps the square color.
    assert_eq!(*image.get_pixel(5, 565), shade_of(7).rgba());
}

#[test]
fn later_placements_are_drawn_over_earlier_ones() {
    let dir = TempDir::new().unwrap();
    let placements = parse_placements("wQe4 bKe4").expect("valid placements");
    let config = config_in(dir.path(), placements);

    config.run().expect("render should succeed");
    let image = read_output(&config.output);

    let layout = BoardLayout::new(640).unwrap();
    let dest = layout.piece_rect(Square::E4);
    let (column, row) = sheet_position(Role::King, Color::Black);
    assert_eq!(*image.get_pixel(dest.x, dest.y), cell_color(column, row));
}

#[test]
fn start_position_fills_every_occupied_square() {
    let dir = TempDir::new().unwrap();
    let placements =
        placements_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").expect("valid FEN");
    let config = config_in(dir.path(), placements.clone());

    config.run().expect("render should succeed");
    let image = read_output(&config.output);

    let layout = BoardLayout::new(640).unwrap();
    for placement in &placements {
        let dest = layout.piece_rect(placement.square);
        let (column, row) = sheet_position(placement.role, placement.color);
        assert_eq!(
            *image.get_pixel(dest.x + 30, dest.y + 30),
            cell_color(column, row),
            "piece on {}",
            placement.square
        );
    }
}

// ---------------------------------------------------------------
// Files
// ---------------------------------------------------------------

#[test]
fn existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), Vec::new());
    fs::write(&config.output, b"stale").unwrap();

    config.run().expect("render should succeed");

    assert_eq!(read_output(&config.output).dimensions(), (640, 640));
}

#[test]
fn missing_sheet_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let config = RenderConfig {
        sprite_sheet: dir.path().join("missing.png"),
        output: dir.path().join("image.png"),
        ..RenderConfig::default()
    };

    let err = config.run().unwrap_err();

    assert!(matches!(err, RenderError::FileNotFound { .. }));
    assert!(!config.output.exists(), "nothing should be written");
}

#[test]
fn corrupt_sheet_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("broken.png");
    fs::write(&sheet, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();
    let config = RenderConfig {
        sprite_sheet: sheet,
        output: dir.path().join("image.png"),
        ..RenderConfig::default()
    };

    let err = config.run().unwrap_err();

    assert!(matches!(err, RenderError::Decode { .. }));
    assert!(!config.output.exists(), "nothing should be written");
}

#[test]
fn unwritable_output_is_encode_error() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path(), Vec::new());
    config.output = dir.path().join("no-such-dir").join("image.png");

    let err = config.run().unwrap_err();

    assert!(matches!(err, RenderError::Encode { .. }));
}
