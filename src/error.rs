use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building a board image.
///
/// Every variant is fatal for a render: nothing is written to disk once one
/// of these has been returned.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("sprite sheet not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite sheet {width}x{height} is smaller than the required {min_width}x{min_height}")]
    SpriteSheetTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid piece: {0:?}")]
    InvalidPiece(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("wrong square notation format {0:?}, expected format \"b7\"")]
    InvalidNotationLength(String),

    #[error("wrong square notation {0:?}, rank/file not found")]
    InvalidNotation(String),

    #[error("invalid placement {token:?}: {reason}")]
    InvalidPlacement { token: String, reason: Box<RenderError> },

    #[error("invalid board FEN {fen:?}: {message}")]
    InvalidFen { fen: String, message: String },

    #[error("invalid canvas size {canvas_size}: {reason}")]
    InvalidLayout {
        canvas_size: u32,
        reason: &'static str,
    },
}
