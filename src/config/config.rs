use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "img_convert",
    about = "Convert image files to different formats.",
    long_about = "Convert a single image file to another format.\nThe output path's extension is replaced when it does not match --extension.\nRun without arguments in a terminal to be prompted for each value."
)]
pub struct Cli {
    /// Path to the input file to be converted.
    #[arg(short, long)]
    pub file: String,
    /// Desired output file extension (png, jpg, jpeg, bmp, gif, ico, tiff, tif, eps, psd, pcx, webp, ppm, pgm, pbm, xbm, tga, msp, pdf).
    #[arg(short, long)]
    pub extension: String,
    /// Output file path with desired destination.
    #[arg(short, long)]
    pub output: String,
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug"])]
    pub log_level: String,
    /// Do not show the progress spinner.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
