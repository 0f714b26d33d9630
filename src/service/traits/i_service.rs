use std::path::Path;

use image::DynamicImage;

use crate::config::formats::TargetFormat;
use crate::error::ConvertResult;
use crate::models::image::OpenedImage;

// Image 服務接口，負責影像的解碼、色彩模式轉換與編碼
pub trait ImageServiceTrait {
    /// 開啟並解碼來源影像
    /// # 參數
    /// - path: 來源檔案路徑
    /// # 回傳
    /// - 成功時返回解碼後的影像與偵測到的格式、色彩模式
    fn open(&self, path: &Path) -> ConvertResult<OpenedImage>;

    /// 依目標格式調整色彩模式，回傳是否改為 RGB
    fn prepare(&self, image: DynamicImage, format: TargetFormat) -> (DynamicImage, bool);

    /// 以目標格式寫出影像
    /// # 參數
    /// - image: 已調整好的影像
    /// - output: 輸出路徑（已修正副檔名）
    /// - format: 目標格式
    fn save(&self, image: &DynamicImage, output: &Path, format: TargetFormat) -> ConvertResult<()>;
}
