use chessboard_render::{Placement, RenderConfig, RenderError};

/// Pieces drawn on the board: `(color, [piece]square)`, pawn when no piece is given.
const PLACEMENTS: &[(&str, &str)] = &[("b", "na1")];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), RenderError> {
    let placements = PLACEMENTS
        .iter()
        .map(|(color, notation)| Placement::parse(color, notation))
        .collect::<Result<Vec<_>, _>>()?;

    RenderConfig {
        placements,
        ..RenderConfig::default()
    }
    .run()
}
