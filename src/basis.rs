use embedded_graphics::pixelcolor::Rgb888;
use image::Rgba;

/// `Color` は 32 ビットの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgb888 {
    fn from(c: Color) -> Self {
        Rgb888::new(c.r, c.g, c.b)
    }
}

/// ワードマークと円の主色.
pub const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);

/// `.ph` と装飾ドットのアクセント色.
pub const ORANGE: Color = Color::rgb(0xf5, 0x9e, 0x0b);

pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

#[test]
fn palette_is_opaque() {
    for c in [BLUE, ORANGE, WHITE].iter() {
        assert_eq!(c.a, 0xff);
    }
    assert_eq!(format!("{:?}", BLUE), "#3b82f6ff");
    assert_eq!(Rgba::from(ORANGE), Rgba([0xf5, 0x9e, 0x0b, 0xff]));
}
