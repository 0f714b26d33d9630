use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub input_path: PathBuf,
    pub extension: String,
    pub output_path: PathBuf,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source_format: String,
    pub source_mode: String,
}
