use std::{ffi::OsStr, fs, io, path::PathBuf};

use ab_glyph::FontArc;
use embedded_graphics::mono_font::{ascii, MonoFont};
use fontdb::{Database, Source};
use thiserror::Error;
use tracing::{debug, info, warn};

#[cfg(test)]
pub(crate) mod bundled;

pub const BOLD: &str = "Arial Bold.ttf";
pub const REGULAR: &str = "Arial.ttf";

/// 組み込みビットマップフォント. セルの高さの降順に並べる.
const BUILTIN_FONTS: [&MonoFont<'static>; 11] = [
    &ascii::FONT_10X20,
    &ascii::FONT_9X18_BOLD,
    &ascii::FONT_9X15_BOLD,
    &ascii::FONT_7X14_BOLD,
    &ascii::FONT_8X13_BOLD,
    &ascii::FONT_6X12,
    &ascii::FONT_6X10,
    &ascii::FONT_6X9,
    &ascii::FONT_5X8,
    &ascii::FONT_5X7,
    &ascii::FONT_4X6,
];

/// `FontLoadError` はフォントファイルを読み込めなかった理由を表す.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("font {name:?} not found on the search path")]
    NotFound { name: String },

    #[error("failed to read font file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid font", .path.display())]
    Invalid { path: PathBuf },
}

/// `Typeface` は描画に使う書体とそのサイズを表す.
///
/// `Outline` は TrueType / OpenType フォントを `size` (1 em あたりのピクセル数) で使う.
/// `Builtin` はどの環境でも必ず使える組み込みのビットマップフォントで, サイズは固定になる.
#[derive(Clone)]
pub enum Typeface {
    Outline { font: FontArc, size: f32 },
    Builtin(&'static MonoFont<'static>),
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Typeface::Outline { size, .. } => write!(f, "Outline({}px)", size),
            Typeface::Builtin(font) => write!(
                f,
                "Builtin({}x{})",
                font.character_size.width, font.character_size.height
            ),
        }
    }
}

impl Typeface {
    /// セルの高さが `size` を超えない最大の組み込みフォントを選ぶ.
    pub fn builtin(size: f32) -> Self {
        let font = BUILTIN_FONTS
            .iter()
            .copied()
            .find(|f| f.character_size.height as f32 <= size)
            .unwrap_or(BUILTIN_FONTS[BUILTIN_FONTS.len() - 1]);
        Typeface::Builtin(font)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin(_))
    }
}

/// `FontLocator` はフォントファイル名から実ファイルを探す検索パスを表す.
///
/// `roots` は `root/<name>` だけを見る. 見つからなければ `fontdb` が集めたフォントファイルから
/// ファイル名が一致するものを探す. どちらも先頭から順に試す.
#[derive(Debug, Clone, Default)]
pub struct FontLocator {
    roots: Vec<PathBuf>,
    font_files: Vec<PathBuf>,
}

impl FontLocator {
    /// 何も見つからない検索パス. 常に組み込みフォントに落ちる.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `font_dirs` は `fontdb` で再帰的に読み込む. シンボリックリンクも辿る.
    pub fn with_dirs(roots: Vec<PathBuf>, font_dirs: Vec<PathBuf>) -> Self {
        let mut db = Database::new();
        for dir in &font_dirs {
            db.load_fonts_dir(dir);
        }
        Self {
            roots,
            font_files: font_files(&db),
        }
    }

    /// 作業ディレクトリ, 同梱の `assets/fonts`, システムにインストールされたフォント.
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "system fonts loaded");

        Self {
            roots: vec![PathBuf::from("."), PathBuf::from("assets/fonts")],
            font_files: font_files(&db),
        }
    }

    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|path| path.is_file())
            .or_else(|| {
                self.font_files
                    .iter()
                    .find(|path| path.file_name() == Some(OsStr::new(name)))
                    .cloned()
            })
    }

    pub fn load(&self, name: &str) -> Result<FontArc, FontLoadError> {
        let path = self.locate(name).ok_or_else(|| FontLoadError::NotFound {
            name: name.to_owned(),
        })?;

        let data = fs::read(&path).map_err(|source| FontLoadError::Io {
            path: path.clone(),
            source,
        })?;

        FontArc::try_from_vec(data).map_err(|_| FontLoadError::Invalid { path })
    }

    /// `names` を順に試し, 最初に読み込めたフォントを `size` で返す.
    ///
    /// 見つからないだけのフォントは静かに飛ばし, 存在するのに読めないフォントは警告して飛ばす.
    pub fn try_select(&self, names: &[&str], size: f32) -> Option<Typeface> {
        for name in names {
            match self.load(name) {
                Ok(font) => {
                    debug!(font = %name, size, "font selected");
                    return Some(Typeface::Outline { font, size });
                }
                Err(e @ FontLoadError::NotFound { .. }) => debug!("{}", e),
                Err(e) => warn!("{}, falling back", e),
            }
        }
        None
    }

    /// `try_select` に失敗したら組み込みフォントを返す. 失敗しない.
    pub fn select(&self, names: &[&str], size: f32) -> Typeface {
        self.try_select(names, size).unwrap_or_else(|| {
            let face = Typeface::builtin(size);
            info!(?names, ?face, "no font file available, using builtin font");
            face
        })
    }
}

fn font_files(db: &Database) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = db
        .faces()
        .filter_map(|face| match &face.source {
            Source::File(path) | Source::SharedFile(path, _) => Some(path.clone()),
            _ => None,
        })
        .collect();

    // fontdb visits directories in read_dir order, which is platform dependent
    files.sort();
    // one entry per collection file, not per face
    files.dedup();
    files
}
