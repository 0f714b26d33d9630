use std::path::PathBuf;

use log::info;

use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConvertResult;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::image::ImageService;

// 轉換執行的適配器，把配置交給 Facade 處理
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> ConvertResult<ConversionOutput> {
        info!(
            "開始轉換，輸入檔案：{}，目標格式：{}，輸出路徑：{}",
            config.file, config.extension, config.output
        );

        let facade: Box<dyn ConversionFacadeTrait> =
            Box::new(ConversionFacade::new(Box::new(ImageService::new())));

        facade.execute_conversion(ConversionInput {
            input_path: PathBuf::from(&config.file),
            extension: config.extension,
            output_path: PathBuf::from(&config.output),
            no_progress: config.no_progress,
        })
    }
}
