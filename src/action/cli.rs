use std::io::{self, IsTerminal};

use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::ConvertResult;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::ConfigService;
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> ConvertResult<ConversionOutput> {
    // 沒有參數且在終端機中執行時改用互動模式
    if args.len() == 1 && io::stdin().is_terminal() {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> ConvertResult<ConversionOutput> {
    let cli = Cli::parse();
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;
    setup_logging(&config.log_level)?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> ConvertResult<AppConfig> {
        Ok(AppConfig {
            file: self.cli.file.clone(),
            extension: self.cli.extension.clone(),
            output: self.cli.output.clone(),
            log_level: self.cli.log_level.clone(),
            no_progress: self.cli.no_progress,
        })
    }
}
