use std::path::{self, Path};

use log::debug;

use crate::config::formats::{is_supported, normalize_extension, path_extension};
use crate::error::{ConvertError, ConvertResult};

/// 依序檢查輸入檔案、來源格式、目標格式與輸出目錄，回傳正規化後的目標副檔名。
///
/// 第一個失敗的檢查決定回傳的錯誤，不會有任何檔案被寫入。
pub fn validate_request(file: &Path, extension: &str, output: &Path) -> ConvertResult<String> {
    if !file.is_file() {
        return Err(ConvertError::FileNotFound(file.to_path_buf()));
    }

    let source_ext = path_extension(file);
    if !is_supported(&source_ext) {
        return Err(ConvertError::UnsupportedSourceFormat(file.to_path_buf()));
    }

    let target_ext = normalize_extension(extension);
    if !is_supported(&target_ext) {
        return Err(ConvertError::UnsupportedTargetFormat(extension.to_string()));
    }

    if output.as_os_str().is_empty() {
        return Err(ConvertError::EmptyOutputPath);
    }
    let absolute = path::absolute(output)?;
    if let Some(dir) = absolute.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            return Err(ConvertError::OutputDirectoryMissing(dir.to_path_buf()));
        }
    }

    debug!("參數驗證通過：來源格式 {}，目標格式 {}", source_ext, target_ext);
    Ok(target_ext)
}
