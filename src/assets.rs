use std::path::PathBuf;

pub const LOGO_PATH: &str = "assets/images/logo/logo.png";
pub const FAVICON_PATH: &str = "assets/images/favicon/favicon.png";

/// `AssetPaths` は出力先のルートディレクトリを表す. 各画像はルートからの固定パスに書き出す.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn logo(&self) -> PathBuf {
        self.root.join(LOGO_PATH)
    }

    pub fn favicon(&self) -> PathBuf {
        self.root.join(FAVICON_PATH)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

#[test]
fn paths_are_fixed_below_root() {
    let paths = AssetPaths::new("/srv/site");
    assert_eq!(
        paths.logo(),
        PathBuf::from("/srv/site/assets/images/logo/logo.png")
    );
    assert_eq!(
        AssetPaths::default().favicon(),
        PathBuf::from("./assets/images/favicon/favicon.png")
    );
}
