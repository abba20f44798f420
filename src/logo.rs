use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    assets::AssetPaths,
    basis::{BLUE, ORANGE},
    canvas::Canvas,
    font::{FontLocator, BOLD, REGULAR},
    text::TextBlock,
};


pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 60;

const MARGIN_LEFT: f32 = 10.0;
const FONT_SIZE: f32 = 32.0;
const SMALL_FONT_SIZE: f32 = 24.0;
const DOT_RADIUS: f32 = 4.0;
const DOT_GAP: f32 = 15.0;

/// "FitFor" "Life" ".ph" のワードマークと装飾ドットを描いた `Canvas` を返す.
pub fn render(fonts: &FontLocator) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    let font = fonts.select(&[BOLD, REGULAR], FONT_SIZE);

    let fit_for = TextBlock::new("FitFor", &font, BLUE);
    let life = TextBlock::new("Life", &font, BLUE);
    let ph = TextBlock::new(".ph", &font, ORANGE);

    let bbox1 = fit_for.measure();
    let w1 = bbox1.width() as f32;
    let h1 = bbox1.height() as f32;
    let w2 = life.measure().width() as f32;
    // measured with the main font even when drawn smaller
    let w3 = ph.measure().width() as f32;

    let x1 = MARGIN_LEFT;
    let y = (HEIGHT as f32 - h1) / 2.0;

    fit_for.draw(&mut canvas, x1, y);
    life.draw(&mut canvas, x1 + w1, y);

    let small_font = fonts
        .try_select(&[REGULAR], SMALL_FONT_SIZE)
        .unwrap_or_else(|| font.clone());
    TextBlock::new(".ph", &small_font, ORANGE).draw(&mut canvas, x1 + w1 + w2 + 2.0, y + 8.0);

    let dot_x = x1 + w1 + w2 + w3 + DOT_GAP;
    let dot_y = y + h1 / 2.0;
    canvas.fill_ellipse(
        [
            dot_x - DOT_RADIUS,
            dot_y - DOT_RADIUS,
            dot_x + DOT_RADIUS,
            dot_y + DOT_RADIUS,
        ],
        ORANGE,
    );

    canvas
}

/// ロゴを描いて `paths.logo()` に書き出す.
pub fn generate(paths: &AssetPaths, fonts: &FontLocator) -> Result<PathBuf> {
    let path = paths.logo();
    render(fonts)
        .save_png(&path)
        .with_context(|| format!("failed to generate logo at {}", path.display()))?;
    info!(path = %path.display(), "logo generated");
    Ok(path)
}
