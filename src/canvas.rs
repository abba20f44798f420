use std::{convert::Infallible, fs, path::Path};

use anyhow::{Context, Result};
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use image::{codecs::png::PngEncoder, ColorType, RgbaImage};
use tracing::debug;

use crate::basis::Color;


/// `Canvas` は描画途中の RGBA ピクセルバッファを表す. 生成直後は全面が透明になる.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// `color` を `coverage` (0.0 ..= 1.0) 倍した不透明度で (x, y) に source-over 合成する.
    /// 範囲外の座標は無視する.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }

        let src_a = color.a as f32 / 255.0 * coverage.max(0.0).min(1.0);
        if src_a <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let mix = |s: u8, d: u8| {
            let v = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            v.round().max(0.0).min(255.0) as u8
        };

        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round().min(255.0) as u8;
    }

    /// `bbox` = `[x0, y0, x1, y1]` の両端を含む矩形に内接する楕円を塗りつぶす.
    /// ピクセル中心が楕円内にあるピクセルを塗る.
    pub fn fill_ellipse(&mut self, bbox: [f32; 4], color: Color) {
        let [x0, y0, x1, y1] = bbox;

        let cx = (x0 + x1 + 1.0) / 2.0;
        let cy = (y0 + y1 + 1.0) / 2.0;
        let rx = (x1 - x0 + 1.0) / 2.0;
        let ry = (y1 - y0 + 1.0) / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        for py in y0.floor() as i32..=y1.ceil() as i32 {
            for px in x0.floor() as i32..=x1.ceil() as i32 {
                let dx = (px as f32 + 0.5 - cx) / rx;
                let dy = (py as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(px, py, color, 1.0);
                }
            }
        }
    }

    /// PNG にエンコードして `path` に書き出す. 親ディレクトリが無ければ作る.
    ///
    /// 一時ファイルに書いてから rename するので, 失敗しても `path` に壊れた PNG は残らない.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let mut encoded = vec![];
        PngEncoder::new(&mut encoded)
            .encode(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ColorType::Rgba8,
            )
            .context("failed to encode png")?;

        let tmp = path.with_extension("png.tmp");
        let written = fs::write(&tmp, &encoded)
            .with_context(|| format!("failed to write {}", tmp.display()))
            .and_then(|_| {
                fs::rename(&tmp, path).with_context(|| {
                    format!("failed to move {} to {}", tmp.display(), path.display())
                })
            });

        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written?;

        debug!(path = %path.display(), bytes = encoded.len(), "png written");
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

// embedded-graphics の組み込みビットマップフォントを直接描くためのターゲット.
impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.blend(
                point.x,
                point.y,
                Color::rgb(color.r(), color.g(), color.b()),
                1.0,
            );
        }
        Ok(())
    }
}
