use std::path::{Path, PathBuf};

use crate::config::formats::path_extension;

/// 輸出路徑的副檔名與目標格式不同時，改為目標副檔名
pub fn resolve_output_path(output: &Path, extension: &str) -> PathBuf {
    if path_extension(output) == extension {
        output.to_path_buf()
    } else {
        output.with_extension(extension)
    }
}

/// 互動模式建議的輸出路徑：同目錄下 `<檔名>_converted.<副檔名>`，不會與來源相同
pub fn suggested_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}_converted.{}", stem, extension))
}
