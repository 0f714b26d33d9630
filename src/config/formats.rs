use std::path::Path;

/// 可作為輸入與輸出的副檔名，順序即為錯誤訊息中的列出順序
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "ico", "tiff", "tif", "eps", "psd", "pcx", "webp", "ppm",
    "pgm", "pbm", "xbm", "tga", "msp", "pdf",
];

pub fn supported_list() -> String {
    SUPPORTED_EXTENSIONS.join(", ")
}

pub fn is_supported(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// 轉小寫並去除開頭的 `.`，例如 `.JPG` -> `jpg`
pub fn normalize_extension(raw: &str) -> String {
    raw.to_lowercase().trim_start_matches('.').to_string()
}

/// 取得路徑的副檔名（小寫），沒有副檔名時回傳空字串
pub fn path_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Ico,
    Tiff,
    Eps,
    Psd,
    Pcx,
    WebP,
    Ppm,
    Pgm,
    Pbm,
    Xbm,
    Tga,
    Msp,
    Pdf,
}

impl TargetFormat {
    pub fn from_extension(ext: &str) -> Option<TargetFormat> {
        let format = match ext {
            "png" => TargetFormat::Png,
            "jpg" | "jpeg" => TargetFormat::Jpeg,
            "bmp" => TargetFormat::Bmp,
            "gif" => TargetFormat::Gif,
            "ico" => TargetFormat::Ico,
            "tif" | "tiff" => TargetFormat::Tiff,
            "eps" => TargetFormat::Eps,
            "psd" => TargetFormat::Psd,
            "pcx" => TargetFormat::Pcx,
            "webp" => TargetFormat::WebP,
            "ppm" => TargetFormat::Ppm,
            "pgm" => TargetFormat::Pgm,
            "pbm" => TargetFormat::Pbm,
            "xbm" => TargetFormat::Xbm,
            "tga" => TargetFormat::Tga,
            "msp" => TargetFormat::Msp,
            "pdf" => TargetFormat::Pdf,
            _ => return None,
        };
        Some(format)
    }

    /// 編碼器使用的格式名稱
    pub fn name(self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Bmp => "BMP",
            TargetFormat::Gif => "GIF",
            TargetFormat::Ico => "ICO",
            TargetFormat::Tiff => "TIFF",
            TargetFormat::Eps => "EPS",
            TargetFormat::Psd => "PSD",
            TargetFormat::Pcx => "PCX",
            TargetFormat::WebP => "WEBP",
            TargetFormat::Ppm => "PPM",
            TargetFormat::Pgm => "PGM",
            TargetFormat::Pbm => "PBM",
            TargetFormat::Xbm => "XBM",
            TargetFormat::Tga => "TGA",
            TargetFormat::Msp => "MSP",
            TargetFormat::Pdf => "PDF",
        }
    }

    pub fn is_jpeg(self) -> bool {
        self == TargetFormat::Jpeg
    }
}
