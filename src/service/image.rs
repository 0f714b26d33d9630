use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use log::{debug, info};

use crate::config::formats::TargetFormat;
use crate::error::{ConvertError, ConvertResult};
use crate::models::image::OpenedImage;
use crate::service::traits::i_service::ImageServiceTrait;
use crate::utils::eps::write_eps;
use crate::utils::pdf::{write_pdf, PDF_RESOLUTION};

const ICO_MAX: u32 = 256;

// 目標格式對應的編碼方式
#[derive(Debug, Clone, Copy)]
enum Encoder {
    Codec(ImageFormat),
    Pnm(PnmSubtype),
    Pdf,
    Eps,
}

fn encoder_for(format: TargetFormat) -> Option<Encoder> {
    let encoder = match format {
        TargetFormat::Png => Encoder::Codec(ImageFormat::Png),
        TargetFormat::Jpeg => Encoder::Codec(ImageFormat::Jpeg),
        TargetFormat::Bmp => Encoder::Codec(ImageFormat::Bmp),
        TargetFormat::Gif => Encoder::Codec(ImageFormat::Gif),
        TargetFormat::Ico => Encoder::Codec(ImageFormat::Ico),
        TargetFormat::Tiff => Encoder::Codec(ImageFormat::Tiff),
        TargetFormat::WebP => Encoder::Codec(ImageFormat::WebP),
        TargetFormat::Tga => Encoder::Codec(ImageFormat::Tga),
        TargetFormat::Ppm => Encoder::Pnm(PnmSubtype::Pixmap(SampleEncoding::Binary)),
        TargetFormat::Pgm => Encoder::Pnm(PnmSubtype::Graymap(SampleEncoding::Binary)),
        TargetFormat::Pbm => Encoder::Pnm(PnmSubtype::Bitmap(SampleEncoding::Binary)),
        TargetFormat::Pdf => Encoder::Pdf,
        TargetFormat::Eps => Encoder::Eps,
        TargetFormat::Psd | TargetFormat::Pcx | TargetFormat::Xbm | TargetFormat::Msp => return None,
    };
    Some(encoder)
}

pub fn format_name(format: Option<ImageFormat>) -> String {
    match format {
        Some(ImageFormat::Png) => "PNG".to_string(),
        Some(ImageFormat::Jpeg) => "JPEG".to_string(),
        Some(ImageFormat::Gif) => "GIF".to_string(),
        Some(ImageFormat::WebP) => "WEBP".to_string(),
        Some(ImageFormat::Pnm) => "PPM".to_string(),
        Some(ImageFormat::Tiff) => "TIFF".to_string(),
        Some(ImageFormat::Tga) => "TGA".to_string(),
        Some(ImageFormat::Bmp) => "BMP".to_string(),
        Some(ImageFormat::Ico) => "ICO".to_string(),
        Some(other) => other
            .extensions_str()
            .first()
            .map(|ext| ext.to_uppercase())
            .unwrap_or_else(|| format!("{:?}", other)),
        None => "UNKNOWN".to_string(),
    }
}

pub fn mode_name(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_string(),
        ColorType::La8 => "LA".to_string(),
        ColorType::Rgb8 => "RGB".to_string(),
        ColorType::Rgba8 => "RGBA".to_string(),
        ColorType::L16 => "I;16".to_string(),
        ColorType::La16 => "LA;16".to_string(),
        ColorType::Rgb16 => "RGB;16".to_string(),
        ColorType::Rgba16 => "RGBA;16".to_string(),
        ColorType::Rgb32F => "RGB;32F".to_string(),
        ColorType::Rgba32F => "RGBA;32F".to_string(),
        other => format!("{:?}", other),
    }
}

fn is_eight_bit(color: ColorType) -> bool {
    color.bytes_per_pixel() == color.channel_count()
}

fn is_sixteen_bit(color: ColorType) -> bool {
    color.bytes_per_pixel() == color.channel_count() * 2
}

/// 轉為 8 位元樣本，保留色彩與透明度通道
fn to_eight_bit(image: DynamicImage) -> DynamicImage {
    let color = image.color();
    match (color.has_color(), color.has_alpha()) {
        (true, true) => DynamicImage::ImageRgba8(image.to_rgba8()),
        (true, false) => DynamicImage::ImageRgb8(image.to_rgb8()),
        (false, true) => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        (false, false) => DynamicImage::ImageLuma8(image.to_luma8()),
    }
}

// 影像服務，以 image crate 進行解碼與編碼
pub struct ImageService;

impl ImageService {
    pub fn new() -> Self {
        ImageService
    }

    fn write(&self, image: &DynamicImage, output: &Path, encoder: Encoder) -> ConvertResult<()> {
        let file = File::create(output)?;
        let mut writer = BufWriter::new(file);

        match encoder {
            Encoder::Pdf => write_pdf(image, &mut writer, PDF_RESOLUTION)?,
            Encoder::Eps => write_eps(image, &mut writer)?,
            Encoder::Pnm(subtype) => {
                let samples = match subtype {
                    PnmSubtype::Pixmap(_) => DynamicImage::ImageRgb8(image.to_rgb8()),
                    PnmSubtype::Bitmap(_) => {
                        // 編碼器把 0 寫成黑色位元，其餘為白色
                        let mut bits = image.to_luma8();
                        for pixel in bits.pixels_mut() {
                            pixel.0[0] = if pixel.0[0] < 128 { 0 } else { 255 };
                        }
                        DynamicImage::ImageLuma8(bits)
                    }
                    _ => DynamicImage::ImageLuma8(image.to_luma8()),
                };
                samples.write_with_encoder(PnmEncoder::new(&mut writer).with_subtype(subtype))?;
            }
            Encoder::Codec(format) => image.write_to(&mut writer, format)?,
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for ImageService {
    fn default() -> Self {
        ImageService::new()
    }
}

impl ImageServiceTrait for ImageService {
    fn open(&self, path: &Path) -> ConvertResult<OpenedImage> {
        // reader 持有檔案，decode 結束時即釋放
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ConvertError::conversion)?;
        let format = format_name(reader.format());
        debug!("偵測到來源格式：{}", format);

        let image = reader.decode()?;
        let mode = mode_name(image.color());
        info!("已解碼 {}：{} x {}，色彩模式 {}", path.display(), image.width(), image.height(), mode);

        Ok(OpenedImage { image, format, mode })
    }

    fn prepare(&self, image: DynamicImage, format: TargetFormat) -> (DynamicImage, bool) {
        let color = image.color();

        if format.is_jpeg() && color.has_alpha() {
            return (DynamicImage::ImageRgb8(image.to_rgb8()), true);
        }

        let keeps_wide_samples = matches!(format, TargetFormat::Png | TargetFormat::Tiff) && is_sixteen_bit(color);
        let image = if is_eight_bit(color) || keeps_wide_samples {
            image
        } else {
            debug!("{} 編碼器僅支援 8 位元樣本，轉換色彩模式 {}", format.name(), mode_name(color));
            to_eight_bit(image)
        };

        let image = if format == TargetFormat::Ico && (image.width() > ICO_MAX || image.height() > ICO_MAX) {
            debug!("ICO 最大為 {0} x {0}，縮小 {1} x {2} 的影像", ICO_MAX, image.width(), image.height());
            image.thumbnail(ICO_MAX, ICO_MAX)
        } else {
            image
        };

        match (format, image.color()) {
            (TargetFormat::Gif, ColorType::Rgb8 | ColorType::Rgba8) => (image, false),
            (TargetFormat::Gif, _) => (DynamicImage::ImageRgba8(image.to_rgba8()), false),
            // TIFF 編碼器不接受灰階加透明度
            (TargetFormat::Tiff, ColorType::La8) => (DynamicImage::ImageRgba8(image.to_rgba8()), false),
            (TargetFormat::Tiff, ColorType::La16) => (DynamicImage::ImageRgba16(image.to_rgba16()), false),
            _ => (image, false),
        }
    }

    fn save(&self, image: &DynamicImage, output: &Path, format: TargetFormat) -> ConvertResult<()> {
        let encoder = encoder_for(format).ok_or_else(|| {
            ConvertError::Conversion(format!("no encoder is available for {} images", format.name()))
        })?;
        debug!("使用 {:?} 寫出 {}", encoder, output.display());

        self.write(image, output, encoder).map_err(ConvertError::into_conversion)
    }
}
