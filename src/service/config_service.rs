use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::ConvertResult;

// 配置服務，負責從選定的適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> ConvertResult<AppConfig> {
        self.config_port.get_config()
    }
}

// 固定值適配器，互動模式收集完答案後使用
pub struct StaticConfigAdapter {
    config: AppConfig,
}

impl StaticConfigAdapter {
    pub fn new(config: AppConfig) -> Self {
        StaticConfigAdapter { config }
    }
}

impl ConfigPort for StaticConfigAdapter {
    fn get_config(&self) -> ConvertResult<AppConfig> {
        Ok(self.config.clone())
    }
}
