use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::formats::supported_list;

// 轉換流程的錯誤分類，全部都是終止性錯誤
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("The file '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "The source file '{}' is not a supported image format.\nSupported formats are: {formats}.",
        .0.display(),
        formats = supported_list()
    )]
    UnsupportedSourceFormat(PathBuf),

    #[error("Unsupported extension '{0}'. Supported extensions are: {formats}.", formats = supported_list())]
    UnsupportedTargetFormat(String),

    #[error("The output path is empty.")]
    EmptyOutputPath,

    #[error("The directory '{}' does not exist.", .0.display())]
    OutputDirectoryMissing(PathBuf),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConvertError {
    pub fn conversion(err: impl std::fmt::Display) -> Self {
        ConvertError::Conversion(err.to_string())
    }

    /// 轉換階段的 I/O 錯誤一律視為轉換失敗
    pub fn into_conversion(self) -> Self {
        match self {
            ConvertError::Io(err) => ConvertError::conversion(err),
            other => other,
        }
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::conversion(err)
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
