use std::io;
use std::path::Path;

use dialoguer::{Input, Select};

use crate::config::formats::{is_supported, path_extension, SUPPORTED_EXTENSIONS};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConvertResult;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, StaticConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::path::suggested_output_path;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> ConvertResult<ConversionOutput> {
    println!("=== Image conversion ===");

    let file = get_input_path()?;
    let extension = get_extension()?;
    let output = get_output_path(&file, extension)?;

    let config = AppConfig {
        file,
        extension: extension.to_string(),
        output,
        log_level: "warn".to_string(),
        no_progress: false,
    };
    let config = ConfigService::new(Box::new(StaticConfigAdapter::new(config))).get_config()?;
    setup_logging(&config.log_level)?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("Image to convert")
        .validate_with(|input: &String| -> Result<(), String> {
            let path = Path::new(input);
            if !path.is_file() {
                Err(format!("The file '{}' does not exist.", input))
            } else if !is_supported(&path_extension(path)) {
                Err(format!("'{}' is not a supported image format.", input))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_extension() -> io::Result<&'static str> {
    let index = Select::new()
        .with_prompt("Target format")
        .items(SUPPORTED_EXTENSIONS)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Format selection failed: {}", e)))?;
    Ok(SUPPORTED_EXTENSIONS[index])
}

pub fn get_output_path(input: &str, extension: &str) -> io::Result<String> {
    let suggested = suggested_output_path(Path::new(input), extension);
    Input::new()
        .with_prompt("Output path")
        .default(suggested.to_string_lossy().into_owned())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
