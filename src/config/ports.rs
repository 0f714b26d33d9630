use crate::error::ConvertResult;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝單次轉換所需的所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub file: String,
    pub extension: String,
    pub output: String,
    pub log_level: String,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> ConvertResult<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> ConvertResult<ConversionOutput>;
}
