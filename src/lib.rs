//! FitForLife.ph のロゴとファビコンを描いて PNG に書き出す.

pub mod assets;
pub mod basis;
pub mod canvas;
pub mod favicon;
pub mod font;
pub mod logo;
pub mod text;


use anyhow::Result;

use crate::{assets::AssetPaths, font::FontLocator};

/// ロゴ, ファビコンの順に生成する. どちらかが失敗したらそこで止める.
pub fn generate_all(paths: &AssetPaths, fonts: &FontLocator) -> Result<()> {
    logo::generate(paths, fonts)?;
    favicon::generate(paths, fonts)?;
    Ok(())
}
