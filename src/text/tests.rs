use super::{BoundingBox, TextBlock};
use crate::{
    basis::{Color, BLUE, ORANGE},
    canvas::Canvas,
    font::{bundled::dejavu_as_arial, Typeface, BOLD, REGULAR},
};

#[test]
fn builtin_measure() {
    let face = Typeface::builtin(32.0);

    let bbox = TextBlock::new("FitFor", &face, BLUE).measure();
    assert_eq!(
        bbox,
        BoundingBox {
            left: 0,
            top: 0,
            right: 60,
            bottom: 20
        }
    );
    assert_eq!(TextBlock::new("Life", &face, BLUE).measure().width(), 40);
    assert_eq!(TextBlock::new(".ph", &face, ORANGE).measure().width(), 30);
    assert_eq!(TextBlock::new("", &face, BLUE).measure().width(), 0);
}

#[test]
fn builtin_draw_stays_in_cell() {
    let face = Typeface::builtin(18.0);
    let block = TextBlock::new("F", &face, ORANGE);
    let bbox = block.measure();
    assert_eq!((bbox.width(), bbox.height()), (9, 18));

    let mut canvas = Canvas::new(40, 40);
    block.draw(&mut canvas, 10.4, 5.6);

    let mut inked = 0;
    for (x, y, p) in canvas.as_image().enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        inked += 1;
        assert_eq!(Color::from(*p), ORANGE);
        assert!((10..19).contains(&x), "x = {}", x);
        assert!((6..24).contains(&y), "y = {}", y);
    }
    assert!(inked > 0);
}

#[test]
fn draw_is_clipped() {
    let face = Typeface::builtin(32.0);
    let mut canvas = Canvas::new(8, 8);
    TextBlock::new("FitForLife", &face, BLUE).draw(&mut canvas, -3.0, -5.0);
    assert_eq!((canvas.width(), canvas.height()), (8, 8));
}

#[test]
fn outline_measure() {
    let (_dir, fonts) = dejavu_as_arial();
    let face = fonts.select(&[BOLD, REGULAR], 32.0);
    assert!(!face.is_builtin());

    let bbox = TextBlock::new("FitFor", &face, BLUE).measure();
    assert_eq!(
        bbox,
        BoundingBox {
            left: 2,
            top: 5,
            right: 107,
            bottom: 31
        }
    );

    // the smaller face of the same family is narrower
    let small = fonts.select(&[REGULAR], 24.0);
    let big = TextBlock::new(".ph", &face, ORANGE).measure();
    let little = TextBlock::new(".ph", &small, ORANGE).measure();
    assert!(little.width() < big.width());

    // no ink, no box
    assert_eq!(
        TextBlock::new("  ", &face, BLUE).measure(),
        BoundingBox::default()
    );
}

#[test]
fn outline_ink_is_inside_bbox() {
    let (_dir, fonts) = dejavu_as_arial();
    let face = fonts.select(&[REGULAR], 24.0);

    let block = TextBlock::new("Life", &face, BLUE);
    let bbox = block.measure();
    assert!(bbox.width() > 0 && bbox.height() > 0);
    assert!(bbox.left >= 0 && bbox.top >= 0);

    let (ox, oy) = (7, 3);
    let mut canvas = Canvas::new(120, 60);
    block.draw(&mut canvas, ox as f32, oy as f32);

    let mut opaque = 0;
    for (x, y, p) in canvas.as_image().enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        let (x, y) = (x as i32 - ox, y as i32 - oy);
        assert!(x >= bbox.left && x < bbox.right, "x = {}", x);
        assert!(y >= bbox.top && y < bbox.bottom, "y = {}", y);
        // antialiased edges keep the fill color and only lower alpha
        let c = Color::from(*p);
        assert_eq!((c.r, c.g, c.b), (BLUE.r, BLUE.g, BLUE.b));
        if c == BLUE {
            opaque += 1;
        }
    }
    assert!(opaque > 0);
}
