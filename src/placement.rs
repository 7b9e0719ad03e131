use shakmaty::{Board, Color, Role, Square};

use crate::error::RenderError;
use crate::notation::parse_square;
use crate::sprite::{parse_color, parse_role};

/// A piece to draw: who owns it, what it is and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub color: Color,
    pub role: Role,
    pub square: Square,
}

impl Placement {
    pub const fn new(color: Color, role: Role, square: Square) -> Self {
        Self {
            color,
            role,
            square,
        }
    }

    /// Build a placement from a color code and a square, optionally
    /// prefixed with a piece code: `("b", "a1")` is a black pawn,
    /// `("w", "Ke1")` a white king.
    pub fn parse(color: &str, notation: &str) -> Result<Self, RenderError> {
        let color = parse_color(color)?;
        let mut chars = notation.chars();
        let (piece, square) = match (chars.next(), notation.chars().count()) {
            (Some(piece), 3) => (piece.to_string(), chars.as_str()),
            _ => (String::new(), notation),
        };
        let role = parse_role(&piece)?;
        let square = parse_square(square)?;
        Ok(Self::new(color, role, square))
    }
}

/// Parse whitespace separated placement tokens of the form
/// `<color>[<piece>]<file><rank>`, e.g. `"wKe1 wQd1 bd7"`.
pub fn parse_placements(text: &str) -> Result<Vec<Placement>, RenderError> {
    text.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Placement, RenderError> {
    let mut chars = token.chars();
    let color = chars.next().map(String::from).unwrap_or_default();
    Placement::parse(&color, chars.as_str()).map_err(|reason| RenderError::InvalidPlacement {
        token: token.to_string(),
        reason: Box::new(reason),
    })
}

/// Placements for every piece in the piece-placement field of a FEN,
/// e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
///
/// A full FEN is accepted too; only its first field is read.
pub fn placements_from_fen(fen: &str) -> Result<Vec<Placement>, RenderError> {
    let field = fen.split_whitespace().next().unwrap_or_default();
    let board: Board = field.parse().map_err(|err: shakmaty::fen::ParseFenError| {
        RenderError::InvalidFen {
            fen: fen.to_string(),
            message: err.to_string(),
        }
    })?;

    Ok(board
        .occupied()
        .into_iter()
        .filter_map(|square| {
            board
                .piece_at(square)
                .map(|piece| Placement::new(piece.color, piece.role, square))
        })
        .collect())
}
