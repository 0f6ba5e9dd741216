//! Fixed names and the image extension allow-list.

/// File name used for a ledger when `index` is not given an output path.
pub const DEFAULT_LEDGER_FILE: &str = "ledger.csv";

/// Image formats accepted by the lister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Webp,
    Gif,
    Tif,
    Tiff,
}

impl ImageExtension {
    /// Every accepted extension, in declaration order.
    pub const ALL: [ImageExtension; 7] = [
        Self::Png,
        Self::Jpg,
        Self::Jpeg,
        Self::Webp,
        Self::Gif,
        Self::Tif,
        Self::Tiff,
    ];

    /// Lower-case extension without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::Gif => "gif",
            Self::Tif => "tif",
            Self::Tiff => "tiff",
        }
    }

    /// Match a raw extension (no dot) case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| ext.eq_ignore_ascii_case(candidate.as_str()))
    }
}

impl AsRef<str> for ImageExtension {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.as_str())
    }
}
