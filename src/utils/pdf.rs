use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use log::debug;

use crate::error::ConvertResult;

/// PDF 輸出固定使用的解析度（dpi）
pub const PDF_RESOLUTION: f32 = 100.0;

// 依序寫入物件並記錄位移，最後產生 xref 表
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        PdfWriter { buf, offsets: Vec::new() }
    }

    fn object(&mut self, dict: &str, stream: Option<&[u8]>) -> usize {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf.extend_from_slice(format!("{} 0 obj\n{}\n", id, dict).as_bytes());
        if let Some(data) = stream {
            self.buf.extend_from_slice(b"stream\n");
            self.buf.extend_from_slice(data);
            self.buf.extend_from_slice(b"\nendstream\n");
        }
        self.buf.extend_from_slice(b"endobj\n");
        id
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref = self.buf.len();
        let count = self.offsets.len() + 1;
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", count);
        for offset in &self.offsets {
            table.push_str(&format!("{:010} 00000 n \n", offset));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, root, xref
        ));
        self.buf.extend_from_slice(table.as_bytes());
        self.buf
    }
}

/// 以像素尺寸與解析度換算頁面大小（點，1/72 英吋）
pub fn page_size(width: u32, height: u32, resolution: f32) -> (f32, f32) {
    (
        width as f32 * 72.0 / resolution,
        height as f32 * 72.0 / resolution,
    )
}

/// 將影像以 DCT 串流嵌入單頁 PDF。
///
/// 沒有色彩的影像寫成 DeviceGray，其餘一律轉為 DeviceRGB，透明度會被捨棄。
pub fn write_pdf<W: Write>(image: &DynamicImage, writer: &mut W, resolution: f32) -> ConvertResult<()> {
    let (flat, color_space) = if image.color().has_color() {
        (DynamicImage::ImageRgb8(image.to_rgb8()), "DeviceRGB")
    } else {
        (DynamicImage::ImageLuma8(image.to_luma8()), "DeviceGray")
    };

    let mut jpeg = Vec::new();
    flat.write_with_encoder(JpegEncoder::new(&mut jpeg))?;

    let (width, height) = (flat.width(), flat.height());
    let (page_w, page_h) = page_size(width, height, resolution);
    debug!("PDF 頁面大小：{} x {} pt（{} dpi）", page_w, page_h, resolution);

    let contents = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q", page_w, page_h);

    let mut pdf = PdfWriter::new();
    let catalog = pdf.object("<< /Type /Catalog /Pages 2 0 R >>", None);
    pdf.object("<< /Type /Pages /Kids [3 0 R] /Count 1 >>", None);
    pdf.object(
        &format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>",
            page_w, page_h
        ),
        None,
    );
    pdf.object(
        &format!(
            "<< /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /{} /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>",
            width,
            height,
            color_space,
            jpeg.len()
        ),
        Some(&jpeg),
    );
    pdf.object(&format!("<< /Length {} >>", contents.len()), Some(contents.as_bytes()));

    writer.write_all(&pdf.finish(catalog))?;
    Ok(())
}
