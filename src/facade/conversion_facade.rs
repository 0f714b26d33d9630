use log::info;

use crate::config::formats::TargetFormat;
use crate::error::{ConvertError, ConvertResult};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::traits::i_service::ImageServiceTrait;
use crate::service::validate::validate_request;
use crate::utils::path::resolve_output_path;
use crate::utils::utils::ProgressManager;

pub struct ConversionFacade {
    image_service: Box<dyn ImageServiceTrait>,
}

impl ConversionFacade {
    pub fn new(image_service: Box<dyn ImageServiceTrait>) -> Self {
        ConversionFacade { image_service }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> ConvertResult<ConversionOutput> {
        let extension = validate_request(&input.input_path, &input.extension, &input.output_path)?;

        let output_path = resolve_output_path(&input.output_path, &extension);
        if output_path != input.output_path {
            info!("輸出副檔名與目標格式不符，改為：{}", output_path.display());
        }

        let format = TargetFormat::from_extension(&extension)
            .ok_or_else(|| ConvertError::UnsupportedTargetFormat(input.extension.clone()))?;

        self.convert(&input, output_path, format)
            .map_err(ConvertError::into_conversion)
    }
}

impl ConversionFacade {
    fn convert(
        &self,
        input: &ConversionInput,
        output_path: std::path::PathBuf,
        format: TargetFormat,
    ) -> ConvertResult<ConversionOutput> {
        let pm = ProgressManager::new(input.no_progress);

        pm.update("Decoding");
        let opened = self.image_service.open(&input.input_path)?;
        pm.println(&format!(
            "Opened image: {} (Format: {}, Mode: {})",
            input.input_path.display(),
            opened.format,
            opened.mode
        ));

        let (image, to_rgb) = self.image_service.prepare(opened.image, format);
        if to_rgb {
            pm.println("Converting image mode to RGB for JPEG format.");
        }

        pm.update("Encoding");
        self.image_service.save(&image, &output_path, format)?;
        pm.finish();

        println!(
            "Successfully converted '{}' to '{}'.",
            input.input_path.display(),
            output_path.display()
        );

        Ok(ConversionOutput {
            input_path: input.input_path.clone(),
            output_path,
            source_format: opened.format,
            source_mode: opened.mode,
        })
    }
}
