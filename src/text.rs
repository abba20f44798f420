use ab_glyph::{point, Font, FontArc, Glyph, OutlinedGlyph, PxScale, ScaleFont};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    text::{renderer::TextRenderer, Baseline, Text},
};

use crate::{basis::Color, canvas::Canvas, font::Typeface};

#[cfg(test)]
mod tests;

/// `BoundingBox` は描画原点 (行の左上) から見た文字列のインクの範囲をピクセル単位で表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// `TextBlock` は書体と色を決めた一塊の文字列を表す.
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub face: &'a Typeface,
    pub color: Color,
}

impl<'a> TextBlock<'a> {
    pub fn new(text: &'a str, face: &'a Typeface, color: Color) -> Self {
        Self { text, face, color }
    }

    pub fn measure(&self) -> BoundingBox {
        match self.face {
            Typeface::Outline { font, size } => {
                let glyphs = outline(font, *size, self.text, 0.0, 0.0);
                glyphs
                    .iter()
                    .map(|g| g.px_bounds())
                    .fold(None, |acc: Option<BoundingBox>, r| {
                        let b = BoundingBox {
                            left: r.min.x.floor() as i32,
                            top: r.min.y.floor() as i32,
                            right: r.max.x.ceil() as i32,
                            bottom: r.max.y.ceil() as i32,
                        };
                        Some(match acc {
                            None => b,
                            Some(a) => BoundingBox {
                                left: a.left.min(b.left),
                                top: a.top.min(b.top),
                                right: a.right.max(b.right),
                                bottom: a.bottom.max(b.bottom),
                            },
                        })
                    })
                    .unwrap_or_default()
            }
            Typeface::Builtin(font) => {
                let style = MonoTextStyle::new(font, Rgb888::from(self.color));
                let rect = style
                    .measure_string(self.text, Point::zero(), Baseline::Top)
                    .bounding_box;
                BoundingBox {
                    left: rect.top_left.x,
                    top: rect.top_left.y,
                    right: rect.top_left.x + rect.size.width as i32,
                    bottom: rect.top_left.y + rect.size.height as i32,
                }
            }
        }
    }

    /// 行の左上を (x, y) に合わせて描く.
    pub fn draw(&self, canvas: &mut Canvas, x: f32, y: f32) {
        match self.face {
            Typeface::Outline { font, size } => {
                for glyph in outline(font, *size, self.text, x, y) {
                    let min = glyph.px_bounds().min;
                    glyph.draw(|gx, gy, coverage| {
                        canvas.blend(
                            min.x as i32 + gx as i32,
                            min.y as i32 + gy as i32,
                            self.color,
                            coverage,
                        );
                    });
                }
            }
            Typeface::Builtin(font) => {
                let style = MonoTextStyle::new(font, Rgb888::from(self.color));
                let origin = Point::new(x.round() as i32, y.round() as i32);
                Text::with_baseline(self.text, origin, style, Baseline::Top)
                    .draw(canvas)
                    .unwrap_or_else(|never| match never {});
            }
        }
    }
}

/// 1 em あたり `size` ピクセルになる `ab_glyph` のスケール.
fn px_scale(font: &FontArc, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) => PxScale::from(size * font.height_unscaled() / upem),
        None => PxScale::from(size),
    }
}

fn outline(font: &FontArc, size: f32, text: &str, x: f32, y: f32) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(px_scale(font, size));
    let baseline = y + scaled.ascent();

    let mut caret = x;
    let mut prev = None;
    let mut glyphs = vec![];

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph: Glyph = id.with_scale_and_position(scaled.scale(), point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);

        // whitespace has no outline
        glyphs.extend(font.outline_glyph(glyph));
    }

    glyphs
}
