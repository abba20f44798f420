use std::fs;

use tempfile::TempDir;

use super::{FontLocator, BOLD, REGULAR};

pub(crate) const SANS: &[u8] = include_bytes!("../../test_fonts/DejaVuSans.ttf");
pub(crate) const SANS_BOLD: &[u8] = include_bytes!("../../test_fonts/DejaVuSans-Bold.ttf");

/// DejaVu Sans を `Arial.ttf`, DejaVu Sans Bold を `Arial Bold.ttf` として置いた検索パス.
/// `TempDir` を落とすとファイルも消えるので一緒に返す.
pub(crate) fn dejavu_as_arial() -> (TempDir, FontLocator) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(REGULAR), SANS).unwrap();
    fs::write(dir.path().join(BOLD), SANS_BOLD).unwrap();
    let fonts = FontLocator::with_dirs(vec![dir.path().to_owned()], vec![]);
    (dir, fonts)
}
