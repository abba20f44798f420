use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    assets::AssetPaths,
    basis::{BLUE, ORANGE, WHITE},
    canvas::Canvas,
    font::{FontLocator, BOLD, REGULAR},
    text::TextBlock,
};


pub const SIZE: u32 = 32;

const MARGIN: f32 = 2.0;
const FONT_SIZE: f32 = 18.0;

/// 青い円に白い "F" と右下の装飾ドットを描いた `Canvas` を返す.
pub fn render(fonts: &FontLocator) -> Canvas {
    let size = SIZE as f32;
    let mut canvas = Canvas::new(SIZE, SIZE);

    canvas.fill_ellipse([MARGIN, MARGIN, size - MARGIN, size - MARGIN], BLUE);

    let font = fonts.select(&[BOLD, REGULAR], FONT_SIZE);
    let label = TextBlock::new("F", &font, WHITE);
    let bbox = label.measure();

    let x = (size - bbox.width() as f32) / 2.0;
    let y = (size - bbox.height() as f32) / 2.0 - 1.0;
    label.draw(&mut canvas, x, y);

    canvas.fill_ellipse([size - 8.0, size - 8.0, size - 4.0, size - 4.0], ORANGE);

    canvas
}

/// ファビコンを描いて `paths.favicon()` に書き出す.
pub fn generate(paths: &AssetPaths, fonts: &FontLocator) -> Result<PathBuf> {
    let path = paths.favicon();
    render(fonts)
        .save_png(&path)
        .with_context(|| format!("failed to generate favicon at {}", path.display()))?;
    info!(path = %path.display(), "favicon generated");
    Ok(path)
}
